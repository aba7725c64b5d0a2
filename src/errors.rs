use reqwest::StatusCode;
use thiserror::Error;

use crate::record::RecordType;

/// Errors raised while signing, sending and classifying a single request.
///
/// These are independent of the operation being performed.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("unable to parse endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("invalid request method {0}")]
    InvalidMethod(String),
    #[error("unable to compute request signature: {0}")]
    Signature(#[from] hmac::digest::InvalidLength),
    #[error("unable to do request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server error: {status}")]
    Server { status: StatusCode },
    #[error("authentication rejected: {status}")]
    Auth { status: StatusCode },
}

impl DispatchError {
    /// The HTTP status attached to the error, if the provider answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DispatchError::Server { status } | DispatchError::Auth { status } => Some(*status),
            DispatchError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("domain {name:?} not found")]
    DomainNotFound { name: String },
    #[error("domain id {id} not found")]
    DomainIdNotFound { id: u64 },
    #[error("domain {name:?} already exists")]
    DomainExists { name: String },
    #[error("domain id {id} has a pending action")]
    DomainIdPending { id: u64 },
    #[error("record [type: {type_}, name: {name:?}, value: {value:?}] already exists")]
    RecordExists {
        type_: RecordType,
        name: String,
        value: String,
    },
    #[error("domain id {domain_id} or record id {record_id} not found")]
    DomainIdOrRecordIdNotFound { domain_id: u64, record_id: u64 },
    #[error("request rejected: {message}")]
    Format { message: String },
    #[error("unable to decode response body {body:?}: {source}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unexpected response status {status}: {body:?}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
