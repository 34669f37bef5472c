// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// The error type for CloudAPI calls.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<ErrorBody>,
    raw: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be signed, it was never sent.
    Signing,
    /// The request could not be built or delivered, or the response not read.
    Transport,
    /// CloudAPI answered with a status other than 200 or 204.
    Server,
    /// The response body could not be decoded into the requested shape.
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Signing => write!(f, "signing failed"),
            ErrorKind::Transport => write!(f, "transport failed"),
            ErrorKind::Server => write!(f, "server error"),
            ErrorKind::Decode => write!(f, "decode failed"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            raw: None,
            source: None,
        }
    }

    /// Wrap a failure raised while signing.
    pub fn signing(err: cloudapi_core::Error) -> Self {
        let message = err.message().to_string();
        Self::new(ErrorKind::Signing, message).with_source(err)
    }

    /// Wrap a failure raised by the transport.
    pub fn transport(err: cloudapi_core::Error) -> Self {
        let message = err.message().to_string();
        Self::new(ErrorKind::Transport, message).with_source(err)
    }

    /// Create a server error from a non-success status and its decoded body.
    pub fn server(status: StatusCode, body: ErrorBody, raw: impl Into<String>) -> Self {
        let message = match (body.code(), body.message()) {
            (Some(code), Some(message)) => format!("{status} {code}: {message}"),
            (None, Some(message)) => format!("{status}: {message}"),
            (Some(code), None) => format!("{status} {code}"),
            (None, None) => status.to_string(),
        };

        let mut err = Self::new(ErrorKind::Server, message);
        err.status = Some(status);
        err.body = Some(body);
        err.raw = Some(raw.into());
        err
    }

    /// Create a decode error carrying the offending body.
    pub fn decode(message: impl Into<String>, raw: impl Into<String>) -> Self {
        let mut err = Self::new(ErrorKind::Decode, message);
        err.raw = Some(raw.into());
        err
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the response status.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Error mapping returned by the server, for [`ErrorKind::Server`].
    pub fn body(&self) -> Option<&ErrorBody> {
        self.body.as_ref()
    }

    /// Raw response body, for [`ErrorKind::Server`] and [`ErrorKind::Decode`].
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl From<cloudapi_core::Error> for Error {
    fn from(err: cloudapi_core::Error) -> Self {
        use cloudapi_core::ErrorKind as CoreKind;

        match err.kind() {
            CoreKind::CredentialInvalid
            | CoreKind::CredentialDenied
            | CoreKind::RequestInvalid
            | CoreKind::ConfigInvalid => Self::signing(err),
            CoreKind::Unexpected => Self::transport(err),
        }
    }
}

/// Error payload returned by CloudAPI.
///
/// Shapes vary between endpoints, so the mapping is kept as the server sent
/// it. Most carry `code` and `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBody(Map<String, Value>);

impl ErrorBody {
    /// Wrap a raw mapping.
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// The `code` field, like `ResourceNotFound`.
    pub fn code(&self) -> Option<&str> {
        self.get_str("code")
    }

    /// The `message` field.
    pub fn message(&self) -> Option<&str> {
        self.get_str("message")
    }

    /// Look up any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Borrow the whole mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the whole mapping.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
