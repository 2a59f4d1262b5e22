use thiserror::Error;

/// Failure to obtain the submitted body fields of a request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("form body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("failed to read form body: {0}")]
    Read(String),

    #[error("failed to decode form body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ParamLogError {
    #[error("unable to extract form fields: {0}")]
    FormExtraction(#[from] FormError),

    #[error("unable to add form field {form}: {source}")]
    FormSerialization {
        form: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to serialize params: {0}")]
    ParamsSerialization(#[source] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}
