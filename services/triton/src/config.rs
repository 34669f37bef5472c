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

use crate::constants::*;
use crate::{Credential, PrivateKey};
use cloudapi_core::utils::Redact;
use cloudapi_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for Triton CloudAPI.
///
/// Every field is optional, a credential is only produced once endpoint,
/// account and key name are all known.
#[derive(Clone, Default)]
pub struct Config {
    /// CloudAPI endpoint URL.
    pub endpoint: Option<String>,
    /// Account login name.
    pub account: Option<String>,
    /// Name of the key registered on the account.
    pub key_name: Option<String>,
    /// Path of the private key file, `~` is expanded.
    ///
    /// Defaults to `~/.ssh/id_rsa` when neither this nor `key_pem` is set.
    pub key_file: Option<String>,
    /// PEM encoded private key, takes precedence over `key_file`.
    pub key_pem: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("account", &self.account)
            .field("key_name", &self.key_name)
            .field("key_file", &Redact::from(&self.key_file))
            .field("key_pem", &self.key_pem.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the account.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set the key name.
    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    /// Set the private key file path.
    pub fn with_key_file(mut self, key_file: impl Into<String>) -> Self {
        self.key_file = Some(key_file.into());
        self
    }

    /// Set the private key content.
    pub fn with_key_pem(mut self, key_pem: impl Into<String>) -> Self {
        self.key_pem = Some(key_pem.into());
        self
    }

    /// Load config from environment variables.
    ///
    /// `TRITON_*` variables win over their `SDC_*` counterparts, empty values count as unset.
    pub fn from_env(ctx: &Context) -> Self {
        let var = |primary: &str, legacy: &str| {
            ctx.env_var(primary)
                .filter(|v| !v.is_empty())
                .or_else(|| ctx.env_var(legacy).filter(|v| !v.is_empty()))
        };

        Self {
            endpoint: var(TRITON_URL, SDC_URL),
            account: var(TRITON_ACCOUNT, SDC_ACCOUNT),
            key_name: var(TRITON_KEY_NAME, SDC_KEY_NAME),
            key_file: var(TRITON_KEY_FILE, SDC_KEY_FILE),
            key_pem: None,
        }
    }

    /// Build a credential out of this config.
    ///
    /// Returns `Ok(None)` if the identity is incomplete.
    pub fn to_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        let (Some(endpoint), Some(account), Some(key_name)) =
            (&self.endpoint, &self.account, &self.key_name)
        else {
            return Ok(None);
        };

        let private_key = match (&self.key_pem, &self.key_file) {
            (Some(pem), _) => PrivateKey::Pem(pem.clone()),
            (None, key_file) => {
                let path = key_file.as_deref().unwrap_or(TRITON_DEFAULT_KEY_FILE);
                let expanded = ctx.expand_home_dir(path).ok_or_else(|| {
                    Error::config_invalid(format!(
                        "failed to expand home directory for key file {:?}",
                        Redact::from(path)
                    ))
                })?;
                PrivateKey::File(expanded)
            }
        };

        Ok(Some(Credential::new(
            endpoint.trim_end_matches('/'),
            account.as_str(),
            key_name.as_str(),
            private_key,
        )))
    }
}
