use {
    std::{
        fmt,
        io
    },
    derive_more::From,
    reqwest::StatusCode
};

#[derive(Debug, From)]
pub enum Error {
    Args(String),
    InvalidSlideCount,
    Io(io::Error),
    Json(serde_json::Error),
    Reqwest(reqwest::Error),
    Server {
        status: StatusCode,
        message: String
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Args(msg) => write!(f, "{}", msg),
            Error::InvalidSlideCount => write!(f, "Number of slides must be a number between 1 and 10."),
            Error::Io(e) => write!(f, "Exception occurred: {}", e),
            Error::Json(e) => write!(f, "Exception occurred: {}", e),
            Error::Reqwest(e) => write!(f, "Exception occurred: {}", e),
            Error::Server { message, .. } => write!(f, "Error: {}", message)
        }
    }
}
