/// Errors raised before any detection work starts.
///
/// Detection itself never fails: undecidable input produces a result with
/// no encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
