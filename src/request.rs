use std::collections::BTreeMap;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::ClientError;

/// Description of a request to send to the DNS Made Easy API, before it is
/// signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub queries: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    /// Creates a new request with no query parameters and an empty body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            queries: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds the given query parameter, replacing any earlier value for `key`.
    pub fn query<T: ToString>(mut self, key: &str, value: T) -> Self {
        self.queries.insert(key.to_string(), value.to_string());
        self
    }

    /// In the case that `value` is some, adds the query parameter.
    pub fn query_if_some<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Sets the body to the JSON encoding of `body`.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = serde_json::to_vec(body).map_err(ClientError::Encode)?;
        Ok(self)
    }
}

/// Optional pagination parameters, passed to the provider as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub page: Option<u32>,
    pub rows: Option<u32>,
}

impl Page {
    pub fn new(page: u32, rows: u32) -> Self {
        Self {
            page: Some(page),
            rows: Some(rows),
        }
    }

    pub(crate) fn apply(self, request: Request) -> Request {
        request
            .query_if_some("page", self.page)
            .query_if_some("rows", self.rows)
    }
}

/// A response that the dispatcher didn't classify as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Response {
    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes a successful response's body.
    ///
    /// # Errors
    /// - `UnexpectedStatus` if the status isn't a success.
    /// - `Decode` if the body isn't the expected JSON.
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        if !self.status.is_success() {
            return Err(self.unexpected());
        }
        serde_json::from_slice(&self.body).map_err(|source| ClientError::Decode {
            body: self.text(),
            source,
        })
    }

    /// Checks that the response is a success, ignoring the body.
    pub(crate) fn empty(self) -> Result<(), ClientError> {
        if !self.status.is_success() {
            return Err(self.unexpected());
        }
        Ok(())
    }

    /// Gets the first message from an error body such as
    /// `{"error": ["Record with this name already exists."]}`.
    ///
    /// Falls back to the whole body in the case that it has another shape.
    pub(crate) fn error_message(&self) -> String {
        #[derive(Deserialize)]
        struct ErrorResp {
            error: Vec<String>,
        }

        serde_json::from_slice::<ErrorResp>(&self.body)
            .ok()
            .and_then(|r| r.error.into_iter().find(|m| !m.is_empty()))
            .unwrap_or_else(|| self.text())
    }

    fn unexpected(self) -> ClientError {
        ClientError::UnexpectedStatus {
            status: self.status,
            body: self.text(),
        }
    }
}
