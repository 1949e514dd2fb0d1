//! Domain logic for the loans service.
//!
//! Pure functions only: customer profile validation and loan eligibility.
//! Nothing in this crate performs I/O, so the HTTP layer can call it from
//! any request without coordination.

pub mod customer;
pub mod error;
pub mod loans;
