//! Loan products and the eligibility rules that decide which ones a
//! customer is offered.
//!
//! Each product has its own predicate and is evaluated independently. The
//! offers are concatenated in a fixed order: personal, guaranteed,
//! consigment.

use serde::Serialize;

use crate::customer::CustomerProfile;

// ---------------------------------------------------------------------------
// Rate and threshold constants
// ---------------------------------------------------------------------------

/// Interest rate of the personal loan.
pub const PERSONAL_RATE: i32 = 4;

/// Interest rate of the guaranteed loan.
pub const GUARANTEED_RATE: i32 = 3;

/// Interest rate of the consigment loan.
pub const CONSIGMENT_RATE: i32 = 2;

/// Income at or below which personal and guaranteed loans are always offered.
pub const LOW_INCOME_CEILING: f64 = 3000.0;

/// Income at or above which the consigment loan is offered.
pub const CONSIGMENT_INCOME_FLOOR: f64 = 5000.0;

/// Customers younger than this qualify for the mid-income bracket rule.
pub const YOUNG_CUSTOMER_AGE_LIMIT: i64 = 30;

/// Only customers in this region qualify for the mid-income bracket rule.
pub const MID_INCOME_LOCATION: &str = "SP";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Loan product label as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanType {
    Personal,
    Guaranteed,
    /// Payroll-deducted loan. The label spelling is part of the public API.
    Consigment,
}

impl LoanType {
    /// Fixed interest rate of this product.
    pub fn interest_rate(self) -> i32 {
        match self {
            Self::Personal => PERSONAL_RATE,
            Self::Guaranteed => GUARANTEED_RATE,
            Self::Consigment => CONSIGMENT_RATE,
        }
    }
}

/// A loan product the customer qualifies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanOffer {
    #[serde(rename = "type")]
    pub loan_type: LoanType,
    pub interested_rate: i32,
}

impl LoanOffer {
    fn of(loan_type: LoanType) -> Self {
        Self {
            loan_type,
            interested_rate: loan_type.interest_rate(),
        }
    }
}

// ---------------------------------------------------------------------------
// Eligibility predicates
// ---------------------------------------------------------------------------

/// Low income, or young mid-income customer in SP.
pub fn is_personal_eligible(customer: &CustomerProfile) -> bool {
    customer.income <= LOW_INCOME_CEILING
        || (customer.age < YOUNG_CUSTOMER_AGE_LIMIT
            && customer.income > LOW_INCOME_CEILING
            && customer.income < CONSIGMENT_INCOME_FLOOR
            && customer.location == MID_INCOME_LOCATION)
}

/// Same condition as [`is_personal_eligible`], kept as a separate rule.
///
/// Both products sharing one condition looks unintended, but changing it
/// needs product-owner sign-off.
pub fn is_guaranteed_eligible(customer: &CustomerProfile) -> bool {
    customer.income <= LOW_INCOME_CEILING
        || (customer.age < YOUNG_CUSTOMER_AGE_LIMIT
            && customer.income > LOW_INCOME_CEILING
            && customer.income < CONSIGMENT_INCOME_FLOOR
            && customer.location == MID_INCOME_LOCATION)
}

pub fn is_consigment_eligible(customer: &CustomerProfile) -> bool {
    customer.income >= CONSIGMENT_INCOME_FLOOR
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

pub fn personal_loan(customer: &CustomerProfile) -> Option<LoanOffer> {
    is_personal_eligible(customer).then(|| LoanOffer::of(LoanType::Personal))
}

pub fn guaranteed_loan(customer: &CustomerProfile) -> Option<LoanOffer> {
    is_guaranteed_eligible(customer).then(|| LoanOffer::of(LoanType::Guaranteed))
}

pub fn consigment_loan(customer: &CustomerProfile) -> Option<LoanOffer> {
    is_consigment_eligible(customer).then(|| LoanOffer::of(LoanType::Consigment))
}

/// Every loan the customer qualifies for, in fixed product order.
///
/// The profile must already have passed [`CustomerProfile::validate`].
/// Returns an empty vector when no rule matches.
pub fn available_loans(customer: &CustomerProfile) -> Vec<LoanOffer> {
    [
        personal_loan(customer),
        guaranteed_loan(customer),
        consigment_loan(customer),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
