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

use crate::provide_credential::{ConfigCredentialProvider, EnvCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use cloudapi_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// Default credential provider for Triton.
///
/// Tries, in order:
/// 1. The given [`Config`]
/// 2. Environment variables (see [`EnvCredentialProvider`])
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(config))
            .push(EnvCredentialProvider::new());

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use cloudapi_core::StaticEnv;
    use std::collections::HashMap;

    fn ctx() -> Context {
        Context::new().with_env(StaticEnv {
            home_dir: Some("/home/ann".into()),
            envs: HashMap::from_iter([
                (TRITON_URL.to_string(), "https://env.example.com".to_string()),
                (TRITON_ACCOUNT.to_string(), "env-account".to_string()),
                (TRITON_KEY_NAME.to_string(), "env-key".to_string()),
            ]),
        })
    }

    #[tokio::test]
    async fn test_config_wins_over_env() -> anyhow::Result<()> {
        let provider = DefaultCredentialProvider::new(
            Config::new()
                .with_endpoint("https://config.example.com")
                .with_account("config-account")
                .with_key_name("config-key"),
        );

        let cred = provider.provide_credential(&ctx()).await?.unwrap();
        assert_eq!(cred.account, "config-account");

        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_to_env() -> anyhow::Result<()> {
        let cred = DefaultCredentialProvider::default()
            .provide_credential(&ctx())
            .await?
            .unwrap();
        assert_eq!(cred.endpoint, "https://env.example.com");
        assert_eq!(cred.key_id(), "/env-account/keys/env-key");

        Ok(())
    }
}
