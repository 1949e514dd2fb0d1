//! Handler for the `/customer-loans` resource.
//!
//! Decodes a customer profile, validates it, and answers with every loan
//! product the customer qualifies for.

use axum::Json;
use loans_core::customer::CustomerProfile;
use loans_core::loans::{available_loans, LoanOffer};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;

/// Request body for `POST /customer-loans`.
///
/// Every field is optional on the wire: omitted and `null` fields fall back
/// to zero values and are then rejected by validation with a field-specific
/// message.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomerLoanRequest {
    pub age: Option<i64>,
    pub cpf: Option<String>,
    pub name: Option<String>,
    pub income: Option<f64>,
    pub location: Option<String>,
}

impl From<CustomerLoanRequest> for CustomerProfile {
    fn from(req: CustomerLoanRequest) -> Self {
        CustomerProfile {
            age: req.age.unwrap_or_default(),
            cpf: req.cpf.unwrap_or_default(),
            name: req.name.unwrap_or_default(),
            income: req.income.unwrap_or_default(),
            location: req.location.unwrap_or_default(),
        }
    }
}

/// Response body for `POST /customer-loans`.
#[derive(Debug, Serialize)]
pub struct CustomerLoanResponse {
    /// The customer's name, echoed back.
    pub customer: String,
    /// Qualifying offers; empty when nothing matches.
    pub loans: Vec<LoanOffer>,
}

/// POST /customer-loans
///
/// Returns 400 with the first failing validation message when the profile
/// is incomplete.
pub async fn evaluate_customer_loans(
    AppJson(input): AppJson<CustomerLoanRequest>,
) -> AppResult<Json<CustomerLoanResponse>> {
    let customer = CustomerProfile::from(input);

    if let Err(err) = customer.validate() {
        tracing::debug!(error = %err, "Customer profile failed validation");
        return Err(err.into());
    }

    let loans = available_loans(&customer);
    tracing::debug!(loan_count = loans.len(), "Evaluated customer loans");

    Ok(Json(CustomerLoanResponse {
        customer: customer.name,
        loans,
    }))
}
