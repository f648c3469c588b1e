use serde::{Deserialize, Serialize};

/// A stored payment-card record as returned by `/PaymentDetails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub payment_id: u64,
    pub card_holder: String,
    pub card_number: String,
    pub exp_date: String,
    pub cvv: String,
}

/// Body of `POST /PaymentDetails` and `PUT /PaymentDetails/{id}`.
///
/// Fields are forwarded verbatim; nothing on the client encrypts or tokenizes
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub card_holder: String,
    pub card_number: String,
    pub exp_date: String,
    pub cvv: String,
}

/// What the payment dialog lists for a stored record: enough to recognise
/// the card, without keeping its number or CVV around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSummary {
    pub payment_id: u64,
    pub card_holder: String,
    pub masked_number: String,
    pub exp_date: String,
}

impl From<&PaymentDetails> for PaymentSummary {
    fn from(details: &PaymentDetails) -> Self {
        Self {
            payment_id: details.payment_id,
            card_holder: details.card_holder.clone(),
            masked_number: mask_card_number(&details.card_number),
            exp_date: details.exp_date.clone(),
        }
    }
}

/// `4111111111111111` → `•••• 1111`. Numbers of four characters or fewer
/// are masked entirely.
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() <= 4 {
        return "••••".to_string();
    }
    let last: String = digits[digits.len() - 4..].iter().collect();
    format!("•••• {}", last)
}
