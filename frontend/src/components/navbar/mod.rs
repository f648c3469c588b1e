//! Top navigation: links to the two list screens and the payment-details modal.
//!
//! The modal lists the stored payment records (masked) and edits or deletes
//! them, or captures a new one. Card data only lives in the form while it is
//! being typed; it is cleared once saved and whenever an edit is abandoned.

use common::error::ApiError;
use common::forms::payment::{PaymentField, PaymentForm};
use common::model::payment::{PaymentDetails, PaymentSummary};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

mod payment_dialog;

use crate::notify::{confirm, notify_error, notify_info};
use crate::router::Route;
use crate::services::payments;

pub enum Msg {
    Open,
    Close,
    Set(PaymentField, String),
    Submit,
    Saved,
    Failed(ApiError),
    CardsLoaded(Result<Vec<PaymentDetails>, ApiError>),
    Edit(u64),
    EditLoaded(u64, Result<PaymentDetails, ApiError>),
    CancelEdit,
    Delete(PaymentSummary),
    Deleted,
    DeleteFailed(ApiError),
}

pub struct Navbar {
    open: bool,
    form: PaymentForm,
    /// Inline invalid markers are only shown after the first submit attempt.
    submitted: bool,
    saving: bool,
    /// Record being edited; `None` when the form creates a new one.
    editing: Option<u64>,
    saved_cards: Vec<PaymentSummary>,
}

impl Navbar {
    fn load_cards(ctx: &Context<Self>) {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::CardsLoaded(payments::list().await));
        });
    }

    fn clear_form(&mut self) {
        self.form = PaymentForm::default();
        self.submitted = false;
        self.editing = None;
    }
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            form: PaymentForm::default(),
            submitted: false,
            saving: false,
            editing: None,
            saved_cards: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => {
                self.open = true;
                Self::load_cards(ctx);
                true
            }
            Msg::Close => {
                self.open = false;
                if self.editing.is_some() {
                    self.clear_form();
                }
                true
            }
            Msg::Set(field, value) => {
                let slot = match field {
                    PaymentField::CardHolder => &mut self.form.card_holder,
                    PaymentField::CardNumber => &mut self.form.card_number,
                    PaymentField::ExpDate => &mut self.form.exp_date,
                    PaymentField::Cvv => &mut self.form.cvv,
                };
                *slot = value;
                true
            }
            Msg::Submit => {
                self.submitted = true;
                if self.saving {
                    return false;
                }
                let payment = match self.form.validate() {
                    Ok(payment) => payment,
                    Err(_) => return true,
                };
                self.saving = true;
                let editing = self.editing;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match editing {
                        Some(id) => payments::update(id, &payment).await,
                        None => payments::submit(&payment).await,
                    };
                    match outcome {
                        Ok(_) => link.send_message(Msg::Saved),
                        Err(err) => link.send_message(Msg::Failed(err)),
                    }
                });
                true
            }
            Msg::Saved => {
                self.clear_form();
                self.saving = false;
                self.open = false;
                notify_info("Payment details saved.");
                true
            }
            Msg::Failed(err) => {
                self.saving = false;
                notify_error("Failed to save payment details", err);
                true
            }
            Msg::CardsLoaded(outcome) => match outcome {
                Ok(records) => {
                    self.saved_cards = records.iter().map(PaymentSummary::from).collect();
                    true
                }
                Err(err) => {
                    notify_error("Failed to load payment details", err);
                    false
                }
            },
            Msg::Edit(id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = payments::get_by_id(id).await;
                    link.send_message(Msg::EditLoaded(id, outcome));
                });
                false
            }
            Msg::EditLoaded(id, outcome) => match outcome {
                Ok(details) => {
                    self.form = PaymentForm::from_details(&details);
                    self.submitted = false;
                    self.editing = Some(id);
                    true
                }
                Err(err) => {
                    notify_error("Failed to load payment details", err);
                    false
                }
            },
            Msg::CancelEdit => {
                self.clear_form();
                true
            }
            Msg::Delete(card) => {
                let question = format!(
                    "Delete the card {} of {}?",
                    card.masked_number, card.card_holder
                );
                if !confirm(&question) {
                    return false;
                }
                if self.editing == Some(card.payment_id) {
                    self.clear_form();
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match payments::delete(card.payment_id).await {
                        Ok(()) => link.send_message(Msg::Deleted),
                        Err(err) => link.send_message(Msg::DeleteFailed(err)),
                    }
                });
                true
            }
            Msg::Deleted => {
                notify_info("Payment details deleted.");
                Self::load_cards(ctx);
                false
            }
            Msg::DeleteFailed(err) => {
                notify_error("Failed to delete", err);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let errors = if self.submitted {
            self.form.validate().err().unwrap_or_default()
        } else {
            Vec::new()
        };

        html! {
            <>
                <nav class="navbar">
                    <span class="brand">{"Car Market"}</span>
                    <Link<Route> to={Route::Listing}>{"Listing"}</Link<Route>>
                    <Link<Route> to={Route::Manage}>{"Manage"}</Link<Route>>
                    <span class="spacer"></span>
                    <button onclick={link.callback(|_| Msg::Open)}>
                        <i class="material-icons">{"credit_card"}</i>
                        {"Payment details"}
                    </button>
                </nav>
                { payment_dialog::view(self, &errors, link) }
            </>
        }
    }
}
