pub type ParseResult<T> = Result<T, ParseException>;

/// Failure to turn one section of scheduler output into a record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseException {
    #[error("Node section has no name line:\n{section}")]
    MissingNodeName { section: String },

    #[error("Job segment has no id:\n{segment}")]
    MissingJobId { segment: String },

    #[error("Storage probe printed {count} tokens, expected 4 or 8.")]
    TokenCount { count: usize },

    #[error("Storage probe token {position} is not a number: {token:?}")]
    InvalidToken { position: usize, token: String },
}
