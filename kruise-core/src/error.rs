/// Errors produced by the `kruise-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A port segment was not a decimal number in `0..=65535`.
    #[error("invalid port '{value}': expected a decimal number in 0..=65535")]
    InvalidPort { value: String },
}
