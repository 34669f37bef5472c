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

use crate::constants::SIGNING_ALGORITHM;
use crate::Credential;
use async_trait::async_trait;
use cloudapi_core::hash::base64_encode;
use cloudapi_core::time::{format_http_date, now, DateTime};
use cloudapi_core::{Context, Error, Result, SignRequest};
use http::header::{AUTHORIZATION, DATE};
use http::HeaderValue;
use log::debug;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use std::time::Duration;

/// RequestSigner that implements the CloudAPI HTTP signature.
///
/// The signed message is the `Date` header value alone:
///
/// ```text
/// Date: Wed, 01 Jan 2020 00:00:00 GMT
/// Authorization: Signature keyId="/<account>/keys/<key_name>",algorithm="rsa-sha256" <base64 signature>
/// ```
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

/// The headers produced by signing one request.
///
/// Built fresh for every request, never reuse it for another one.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value of the `Date` header, which is also the signed message.
    pub date: String,
    /// Value of the `Authorization` header.
    pub authorization: String,
}

impl std::fmt::Debug for SignedHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("date", &self.date)
            .field("authorization", &"<redacted>")
            .finish()
    }
}

impl SignedHeaders {
    /// Insert `Date` and `Authorization` into the request.
    pub fn apply(self, req: &mut http::request::Parts) -> Result<()> {
        req.headers.insert(DATE, HeaderValue::from_str(&self.date)?);

        let mut authorization = HeaderValue::from_str(&self.authorization)?;
        authorization.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, authorization);

        Ok(())
    }
}

impl RequestSigner {
    /// Create a new signer that always takes the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    /// Build the signed header set for `cred`.
    ///
    /// Fails if the private key can't be loaded or the signature can't be
    /// computed, the request must not be sent in that case.
    pub async fn sign_headers(&self, ctx: &Context, cred: &Credential) -> Result<SignedHeaders> {
        let date = format_http_date(self.get_time());
        let key_id = cred.key_id();
        debug!("signing date {date:?} with key {key_id}");

        let private_key = cred.private_key.load(ctx).await?;
        let signature = sign_string(private_key, &date)?;

        Ok(SignedHeaders {
            authorization: authorization_value(&key_id, &signature),
            date,
        })
    }
}

/// Sign `string_to_sign` with RSASSA-PKCS1-v1_5 over SHA-256, base64 encoded.
pub(crate) fn sign_string(private_key: RsaPrivateKey, string_to_sign: &str) -> Result<String> {
    let signing_key = SigningKey::<Sha256>::new(private_key);
    let signature = signing_key
        .try_sign(string_to_sign.as_bytes())
        .map_err(|e| Error::unexpected("failed to sign date").with_source(e))?;
    Ok(base64_encode(&signature.to_bytes()))
}

fn authorization_value(key_id: &str, signature: &str) -> String {
    format!(r#"Signature keyId="{key_id}",algorithm="{SIGNING_ALGORITHM}" {signature}"#)
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "no credential available, refusing to send an unsigned request",
            ));
        };
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "CloudAPI signatures don't support expiration",
            ));
        }

        self.sign_headers(ctx, cred).await?.apply(req)
    }
}
