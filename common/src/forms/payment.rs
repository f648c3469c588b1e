use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::payment::{CreatePayment, PaymentDetails};

static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card number pattern"));
static EXPIRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("expiry pattern"));
static CVV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("cvv pattern"));

/// Raw contents of the payment-details dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub card_holder: String,
    pub card_number: String,
    pub exp_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    CardHolder,
    CardNumber,
    ExpDate,
    Cvv,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentFieldError {
    #[error("Card holder name is required.")]
    MissingCardHolder,
    #[error("Card number must be exactly 16 digits.")]
    CardNumberFormat,
    #[error("Expiry must look like MM/YY with a month from 01 to 12.")]
    ExpiryFormat,
    #[error("CVV must be exactly 3 digits.")]
    CvvFormat,
}

impl PaymentFieldError {
    pub fn field(&self) -> PaymentField {
        match self {
            PaymentFieldError::MissingCardHolder => PaymentField::CardHolder,
            PaymentFieldError::CardNumberFormat => PaymentField::CardNumber,
            PaymentFieldError::ExpiryFormat => PaymentField::ExpDate,
            PaymentFieldError::CvvFormat => PaymentField::Cvv,
        }
    }
}

impl PaymentForm {
    /// Prefills the dialog with a stored record for editing.
    pub fn from_details(details: &PaymentDetails) -> Self {
        Self {
            card_holder: details.card_holder.clone(),
            card_number: details.card_number.clone(),
            exp_date: details.exp_date.clone(),
            cvv: details.cvv.clone(),
        }
    }

    /// Applies the presentation-layer format guards and builds the request
    /// body. Surrounding whitespace is dropped, nothing else is rewritten.
    pub fn validate(&self) -> Result<CreatePayment, Vec<PaymentFieldError>> {
        let card_holder = self.card_holder.trim();
        let card_number = self.card_number.trim();
        let exp_date = self.exp_date.trim();
        let cvv = self.cvv.trim();

        let mut errors = Vec::new();
        if card_holder.is_empty() {
            errors.push(PaymentFieldError::MissingCardHolder);
        }
        if !CARD_NUMBER.is_match(card_number) {
            errors.push(PaymentFieldError::CardNumberFormat);
        }
        if !EXPIRY.is_match(exp_date) {
            errors.push(PaymentFieldError::ExpiryFormat);
        }
        if !CVV.is_match(cvv) {
            errors.push(PaymentFieldError::CvvFormat);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreatePayment {
            card_holder: card_holder.to_string(),
            card_number: card_number.to_string(),
            exp_date: exp_date.to_string(),
            cvv: cvv.to_string(),
        })
    }
}
