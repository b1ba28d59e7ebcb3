use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(Box<ureq::Error>),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("api error: {0}")]
    ApiMessage(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("no usable release: {0}")]
    NoUsableRelease(String),
    #[error("no stable release available")]
    MissingStableRelease,
}

impl From<ureq::Error> for FetchError {
    fn from(error: ureq::Error) -> FetchError {
        FetchError::Http(Box::new(error))
    }
}
