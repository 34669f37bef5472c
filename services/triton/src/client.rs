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

use crate::constants::{ACCEPT_VERSION, ACCEPT_VERSION_HEADER};
use crate::{parse_response, Credential, Error, RequestSigner, Result, StaticCredentialProvider};
use bytes::Bytes;
use cloudapi_core::{Context, ProvideCredential, Signer};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Request};
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Everything but `-`, `_` and `~` is escaped inside a path segment, so a
/// name can't introduce `/`, `?` or a `..` segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// Join `segments` into an account relative path, escaping each one.
pub(crate) fn path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| format!("/{}", utf8_percent_encode(s, PATH_SEGMENT)))
        .collect()
}

/// Client for one CloudAPI account.
///
/// Every call is signed with the account's credential, which is loaded once
/// by the configured provider and cached by the inner [`Signer`]. Cloning is
/// cheap and clones share the cached credential.
#[derive(Clone, Debug)]
pub struct Client {
    signer: Signer<Credential>,
}

impl Client {
    /// Create a client that loads its credential from `provider`.
    pub fn new(ctx: Context, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        Self::with_request_signer(ctx, provider, RequestSigner::new())
    }

    /// Create a client for an already built credential.
    pub fn with_credential(ctx: Context, credential: Credential) -> Self {
        Self::new(ctx, StaticCredentialProvider::new(credential))
    }

    /// Create a client with a custom [`RequestSigner`], mostly useful to pin
    /// the signing time in tests.
    pub fn with_request_signer(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        builder: RequestSigner,
    ) -> Self {
        Self {
            signer: Signer::new(ctx, provider, builder),
        }
    }

    /// The context used to read keys and send requests.
    pub fn context(&self) -> &Context {
        self.signer.context()
    }

    /// `GET {endpoint}/{account}{path}` and decode the body into `T`.
    ///
    /// `path` is relative to the account and starts with `/`, or is empty for
    /// the account itself. It is used as is, escape caller supplied names
    /// when building it.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, None).await
    }

    /// `POST` a form encoded body and decode the response into `T`.
    pub async fn post_form<F, T>(&self, path: &str, form: &F) -> Result<T>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_urlencoded::to_string(form).map_err(|e| {
            Error::transport(
                cloudapi_core::Error::request_invalid("failed to encode form body").with_source(e),
            )
        })?;
        self.send(Method::POST, path, Some(body)).await
    }

    /// `POST ?action=<action>` style call whose response carries no data.
    pub async fn post_action(&self, path: &str, action: &str) -> Result<()> {
        self.post_form(path, &[("action", action)]).await
    }

    /// `DELETE` a resource.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T> {
        let cred = self
            .signer
            .credential()
            .await
            .map_err(Error::signing)?
            .ok_or_else(|| {
                Error::signing(cloudapi_core::Error::credential_invalid(
                    "no valid credential found",
                ))
            })?;

        let url = format!("{}{}{}", cred.endpoint, self::path(&[cred.account.as_str()]), path);
        debug!("sending {method} {url}");

        let mut builder = Request::builder()
            .method(method)
            .uri(&url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(ACCEPT_VERSION_HEADER, ACCEPT_VERSION);
        if body.is_some() {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        }
        let req = builder
            .body(body.map(Bytes::from).unwrap_or_default())
            .map_err(|e| Error::transport(e.into()))?;

        let (mut parts, body) = req.into_parts();
        self.signer
            .sign_with_credential(&mut parts, Some(&cred), None)
            .await
            .map_err(Error::signing)?;

        let resp = self
            .context()
            .http_send(Request::from_parts(parts, body))
            .await
            .map_err(Error::transport)?;
        debug!("{url} responded with {}", resp.status());

        parse_response(resp)
    }
}
