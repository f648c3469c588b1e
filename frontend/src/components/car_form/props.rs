use common::forms::car::CarForm;
use yew::prelude::*;

use super::CarSubmission;

#[derive(Properties, PartialEq, Clone)]
pub struct CarFormProps {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("Save"))]
    pub submit_label: AttrValue,
    /// Values the dialog starts from each time it opens; empty for a new car.
    #[prop_or_default]
    pub initial: CarForm,
    /// Disables the submit button while the parent's request is in flight.
    #[prop_or_default]
    pub busy: bool,
    pub on_submit: Callback<CarSubmission>,
    pub on_close: Callback<()>,
}
