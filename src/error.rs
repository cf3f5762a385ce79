use thiserror::Error;

pub type SelectorResult<T> = Result<T, SelectorError>;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported line attribute `{0}`")]
    UnsupportedAttribute(String),

    #[error("attribute `{attr}` expects a {expected} value, got {got}")]
    AttrTypeMismatch {
        attr: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("series index {index} out of bounds for {len} series")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("snapshot buffer is empty")]
    EmptyBuffer,

    #[error("clipboard is empty")]
    EmptyClipboard,
}
