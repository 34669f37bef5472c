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

use cloudapi_core::utils::Redact;
use cloudapi_core::{Context, Error, Result};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use std::fmt::{Debug, Formatter};

/// Where the RSA private key registered on the account comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum PrivateKey {
    /// Path to a PEM file, read through [`Context::file_read`] on every signing.
    File(String),
    /// PEM content held in memory.
    Pem(String),
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PrivateKey::File(path) => f.debug_tuple("File").field(&Redact::from(path)).finish(),
            PrivateKey::Pem(_) => f.debug_tuple("Pem").field(&"<redacted>").finish(),
        }
    }
}

impl PrivateKey {
    /// Returns true if the reference points at nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            PrivateKey::File(path) => path.is_empty(),
            PrivateKey::Pem(pem) => pem.trim().is_empty(),
        }
    }

    /// Load and parse the key.
    pub async fn load(&self, ctx: &Context) -> Result<RsaPrivateKey> {
        match self {
            PrivateKey::File(path) => {
                let content = ctx.file_read_as_string(path).await.map_err(|e| {
                    let kind = if e.kind() == cloudapi_core::ErrorKind::CredentialDenied {
                        e.kind()
                    } else {
                        cloudapi_core::ErrorKind::CredentialInvalid
                    };
                    Error::new(kind, "failed to read private key").with_source(e)
                })?;
                parse_private_key(&content)
            }
            PrivateKey::Pem(pem) => parse_private_key(pem),
        }
    }
}

/// Parse an RSA private key in PKCS#1 (`BEGIN RSA PRIVATE KEY`) or
/// PKCS#8 (`BEGIN PRIVATE KEY`) PEM form.
///
/// Encrypted keys are not supported.
pub(crate) fn parse_private_key(pem: &str) -> Result<RsaPrivateKey> {
    let pem = pem.trim();
    if pem.contains("BEGIN RSA PRIVATE KEY") {
        RsaPrivateKey::from_pkcs1_pem(pem)
            .map_err(|e| Error::credential_invalid("failed to parse PKCS#1 private key").with_source(e))
    } else {
        RsaPrivateKey::from_pkcs8_pem(pem)
            .map_err(|e| Error::credential_invalid("failed to parse PKCS#8 private key").with_source(e))
    }
}
