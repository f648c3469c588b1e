use common::forms::car::CarForm;
use common::forms::draft::CarDraft;
use web_sys::{File, HtmlInputElement};
use yew::NodeRef;

pub struct CarFormDialog {
    /// Form values, pending upload and preview.
    pub draft: CarDraft<File>,

    pub file_input_ref: NodeRef,
}

impl CarFormDialog {
    pub fn new(initial: &CarForm) -> Self {
        Self {
            draft: CarDraft::new(initial),
            file_input_ref: NodeRef::default(),
        }
    }

    pub fn reset(&mut self, initial: &CarForm) {
        self.draft.reset(initial);
        self.clear_file_input();
    }

    pub fn forget_image(&mut self) {
        self.draft.clear_image();
        self.clear_file_input();
    }

    /// Empties the native file input so picking the same file again still
    /// fires `change`.
    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
