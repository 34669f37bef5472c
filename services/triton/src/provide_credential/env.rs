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

use crate::{Config, Credential};
use async_trait::async_trait;
use cloudapi_core::{Context, ProvideCredential, Result};
use log::debug;

/// EnvCredentialProvider loads Triton credentials from environment variables.
///
/// - `TRITON_URL` / `SDC_URL`: CloudAPI endpoint
/// - `TRITON_ACCOUNT` / `SDC_ACCOUNT`: account login
/// - `TRITON_KEY_NAME` / `SDC_KEY_NAME`: key name on the account
/// - `TRITON_KEY_FILE` / `SDC_KEY_FILE`: private key path, defaults to `~/.ssh/id_rsa`
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let cred = Config::from_env(ctx).to_credential(ctx)?;
        if cred.is_none() {
            debug!("incomplete triton environment, skipping");
        }
        Ok(cred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::PrivateKey;
    use cloudapi_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: Some("/home/ann".into()),
            envs: HashMap::from_iter([
                (SDC_URL.to_string(), "https://cloudapi.example.com".to_string()),
                (TRITON_ACCOUNT.to_string(), "ann".to_string()),
                (TRITON_KEY_NAME.to_string(), "laptop".to_string()),
                (TRITON_KEY_FILE.to_string(), "~/keys/triton.pem".to_string()),
            ]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.endpoint, "https://cloudapi.example.com");
        assert_eq!(cred.account, "ann");
        assert_eq!(cred.key_name, "laptop");
        assert_eq!(
            cred.private_key,
            PrivateKey::File("/home/ann/keys/triton.pem".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_incomplete() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([(TRITON_ACCOUNT.to_string(), "ann".to_string())]),
        });

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
