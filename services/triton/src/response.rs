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

use crate::normalize::normalize_value;
use crate::{Error, ErrorBody, Result};
use bytes::Bytes;
use http::StatusCode;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Returns true for the statuses CloudAPI uses to report success.
pub fn is_success(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NO_CONTENT
}

/// Classify a raw response and decode it.
///
/// - 200 and 204 decode the body into `T`. An empty body decodes as JSON
///   `null`, so `()` and `Option<_>` targets accept it.
/// - Every other status becomes an [`ErrorKind::Server`](crate::ErrorKind::Server)
///   error carrying the body as an [`ErrorBody`], with keys exactly as sent.
pub fn parse_response<T: DeserializeOwned>(resp: http::Response<Bytes>) -> Result<T> {
    let (parts, body) = resp.into_parts();
    let status = parts.status;
    debug!("got response with status {status}, {} bytes", body.len());

    let text = match String::from_utf8(body.to_vec()) {
        Ok(text) => text,
        Err(e) => {
            let raw = String::from_utf8_lossy(e.as_bytes()).to_string();
            return Err(Error::decode("response body is not valid utf-8", raw)
                .with_status(status)
                .with_source(e));
        }
    };

    if is_success(status) {
        decode(&text).map_err(|e| e.with_status(status))
    } else {
        Err(server_error(status, text))
    }
}

/// Normalize and decode a response body into `T`.
///
/// Missing fields decode as absent and unknown fields are ignored as long as
/// `T` is declared that way, which all [`types`](crate::types) are.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let mut value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body)
            .map_err(|e| Error::decode("response body is not valid JSON", body).with_source(e))?
    };

    normalize_value(&mut value);
    serde_json::from_value(value).map_err(|e| {
        Error::decode(
            format!(
                "response body does not match {}: {e}",
                std::any::type_name::<T>()
            ),
            body,
        )
        .with_source(e)
    })
}

fn server_error(status: StatusCode, text: String) -> Error {
    let map = match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    Error::server(status, ErrorBody::new(map), text)
}
