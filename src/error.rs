/// Errors that abort a conversion run.
///
/// Unrecognized rep data is deliberately not in here: it degrades the
/// affected set to an empty rep list with a warning instead of failing the
/// whole run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("malformed line (no name/data separator): {0:?}")]
    MalformedLine(String),

    #[error("invalid rep count {token:?} in {text:?}")]
    InvalidCount { token: String, text: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
