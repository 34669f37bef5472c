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

use crate::PrivateKey;
use cloudapi_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that identifies an account and the key registered on it.
///
/// A credential is never mutated once built; share it by cloning.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// CloudAPI endpoint, like `https://us-east-1.api.example.com`.
    pub endpoint: String,
    /// Account login name.
    pub account: String,
    /// Name of the SSH key as registered on the account.
    pub key_name: String,
    /// The RSA private key matching `key_name`.
    pub private_key: PrivateKey,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        endpoint: impl Into<String>,
        account: impl Into<String>,
        key_name: impl Into<String>,
        private_key: PrivateKey,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            account: account.into(),
            key_name: key_name.into(),
            private_key,
        }
    }

    /// The `keyId` presented in the authorization header: `/<account>/keys/<key_name>`.
    pub fn key_id(&self) -> String {
        format!("/{}/keys/{}", self.account, self.key_name)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("endpoint", &self.endpoint)
            .field("account", &self.account)
            .field("key_name", &self.key_name)
            .field("private_key", &self.private_key)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !(self.endpoint.is_empty()
            || self.account.is_empty()
            || self.key_name.is_empty()
            || self.private_key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential::new(
            "https://cloudapi.example.com",
            "ann",
            "laptop",
            PrivateKey::File("/home/ann/.ssh/id_rsa".to_string()),
        )
    }

    #[test]
    fn test_key_id() {
        assert_eq!(credential().key_id(), "/ann/keys/laptop");
    }

    #[test]
    fn test_is_valid() {
        assert!(credential().is_valid());

        let mut cred = credential();
        cred.key_name = String::new();
        assert!(!cred.is_valid());

        let mut cred = credential();
        cred.private_key = PrivateKey::Pem("  ".to_string());
        assert!(!cred.is_valid());
    }

    #[test]
    fn test_debug_redacts_key_path() {
        let printed = format!("{:?}", credential());
        assert!(printed.contains("File(/ho***rsa)"));
        assert!(!printed.contains("/home/ann/.ssh/id_rsa"));
    }
}
