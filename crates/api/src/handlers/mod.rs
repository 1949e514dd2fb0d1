pub mod customer_loans;
