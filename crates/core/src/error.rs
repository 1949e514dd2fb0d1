/// Domain-level error returned by the loans core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// The customer profile failed one of the ordered validation checks.
    /// The message is reported to the caller verbatim.
    #[error("{0}")]
    Validation(String),
}
