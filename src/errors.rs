#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("an OR node must be the only top-level node")]
    OrNotAlone,

    #[error("an OR node needs at least two alternatives, got {0}")]
    TooFewAlternatives(usize),

    #[error("empty search term")]
    EmptyTerm,

    #[error("search term is not lowercase: {0:?}")]
    NotLowercase(String),

    #[error("search term has untrimmed or repeated whitespace: {0:?}")]
    UncollapsedWhitespace(String),

    #[error("search term cannot be written as a query: {0:?}")]
    Unquotable(String),

    #[cfg(feature = "serde")]
    #[error("json error: {0:?}")]
    Json(#[from] serde_json::Error),
}
