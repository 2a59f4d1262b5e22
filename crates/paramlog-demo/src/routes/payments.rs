use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChargeForm {
    pub credit_card: String,
    #[serde(rename = "CVC")]
    pub cvc: String,
    pub amount: u64,
}

#[derive(Serialize)]
pub struct ChargeResponse {
    pub last4: String,
    pub amount: u64,
}

pub async fn charge(Form(form): Form<ChargeForm>) -> Result<Json<ChargeResponse>, ApiError> {
    if form.cvc.len() < 3 {
        return Err(ApiError::PaymentRequired("card declined".to_string()));
    }

    let digits: Vec<char> = form.credit_card.chars().filter(char::is_ascii_digit).collect();
    let last4: String = digits[digits.len().saturating_sub(4)..].iter().collect();

    Ok(Json(ChargeResponse {
        last4,
        amount: form.amount,
    }))
}
