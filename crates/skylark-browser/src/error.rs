use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unsupported browser executable; detected before launch
    #[error("Environment error: {0}")]
    Environment(String),

    /// Any failure while launching, driving, or closing the browser
    #[error("Execution error: {0}")]
    Execution(String),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Execution(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
