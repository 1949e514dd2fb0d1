//! Route definitions for the `/customer-loans` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::customer_loans;

/// Routes mounted at the root.
///
/// ```text
/// POST   /customer-loans   -> evaluate_customer_loans
/// ```
///
/// Any other method on the path, `OPTIONS` and `HEAD` included, answers 405.
pub fn router() -> Router {
    Router::new().route(
        "/customer-loans",
        post(customer_loans::evaluate_customer_loans),
    )
}
