use std::error::Error;
use std::fmt;

// Typed outcome of any exchange with the bot API. Status codes are carried
// as plain u16 so the domain stays free of HTTP client types.
#[derive(Debug)]
pub enum ApiError {
    // The request never produced a response (connect, timeout, send).
    Transport(Box<dyn Error + Send + Sync>),
    // The server answered with a non-2xx status; message is the decoded
    // optional `error` field of the body.
    Upstream {
        status: u16,
        message: Option<String>,
    },
    // The success body could not be decoded into the expected shape.
    Decode(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport error: {err}"),
            ApiError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "upstream error {status}: {message}")
                } else {
                    write!(f, "upstream error {status}")
                }
            }
            ApiError::Decode(err) => write!(f, "response decode error: {err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Transport(err) | ApiError::Decode(err) => {
                Some(&**err as &(dyn Error + 'static))
            }
            ApiError::Upstream { .. } => None,
        }
    }
}

// Operation-level failure handed back to the page controller. Upstream
// failures that were rendered into a page target never surface here.
#[derive(Debug)]
pub enum DashboardError {
    // The operator declined to supply a user id; nothing was sent.
    IdentityDeclined,
    // An API failure that no page target displayed.
    Api(ApiError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::IdentityDeclined => {
                write!(f, "operator declined to supply a user id")
            }
            DashboardError::Api(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DashboardError::IdentityDeclined => None,
            DashboardError::Api(err) => Some(err),
        }
    }
}

impl From<ApiError> for DashboardError {
    fn from(err: ApiError) -> Self {
        DashboardError::Api(err)
    }
}
