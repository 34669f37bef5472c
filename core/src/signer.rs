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

use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on first use and cached until it stops being
/// valid. Signing itself always happens per request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// The context this signer was built with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Return the cached credential, loading it if absent or invalid.
    pub async fn credential(&self) -> Result<Option<K>> {
        let cred = self.credential.lock().expect("lock poisoned").clone();
        if cred.is_valid() {
            return Ok(cred);
        }

        let cred = self.loader.provide_credential(&self.ctx).await?;
        *self.credential.lock().expect("lock poisoned") = cred.clone();
        Ok(cred)
    }

    /// Signing request.
    pub async fn sign(
        &self,
        req: &mut http::request::Parts,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let cred = self.credential().await?;
        self.sign_with_credential(req, cred.as_ref(), expires_in)
            .await
    }

    /// Sign with a credential already obtained from [`Signer::credential`],
    /// without consulting the provider again.
    pub async fn sign_with_credential(
        &self,
        req: &mut http::request::Parts,
        credential: Option<&K>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        self.builder
            .sign_request(&self.ctx, req, credential, expires_in)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct TestCredential(String);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct CountingLoader {
        value: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for CountingLoader {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<TestCredential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(TestCredential(self.value.to_string())))
        }
    }

    #[derive(Debug)]
    struct HeaderSigner;

    #[async_trait::async_trait]
    impl SignRequest for HeaderSigner {
        type Credential = TestCredential;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut http::request::Parts,
            credential: Option<&TestCredential>,
            _: Option<Duration>,
        ) -> Result<()> {
            if let Some(cred) = credential {
                req.headers.insert("x-test", cred.0.parse()?);
            }
            Ok(())
        }
    }

    fn parts() -> http::request::Parts {
        http::Request::builder()
            .uri("https://example.com/")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_valid_credential_is_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingLoader {
                value: "abc",
                calls: calls.clone(),
            },
            HeaderSigner,
        );

        let mut req = parts();
        signer.sign(&mut req, None).await.unwrap();
        signer.sign(&mut parts(), None).await.unwrap();

        assert_eq!(req.headers["x-test"], "abc");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_credential_is_reloaded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingLoader {
                value: "",
                calls: calls.clone(),
            },
            HeaderSigner,
        );

        signer.sign(&mut parts(), None).await.unwrap();
        signer.sign(&mut parts(), None).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_sign_with_credential_skips_loader() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingLoader {
                value: "",
                calls: calls.clone(),
            },
            HeaderSigner,
        );

        let cred = signer.credential().await.unwrap();
        let mut req = parts();
        signer
            .sign_with_credential(&mut req, Some(&TestCredential("xyz".to_string())), None)
            .await
            .unwrap();
        signer
            .sign_with_credential(&mut parts(), cred.as_ref(), None)
            .await
            .unwrap();

        assert_eq!(req.headers["x-test"], "xyz");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
