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
use super::*;
use anyhow::Result;
use cloudapi_core::Context;
use cloudapi_file_read_tokio::TokioFileRead;
use cloudapi_triton::RequestSigner;
use pretty_assertions::assert_eq;
use std::io::Write;

#[tokio::test]
async fn test_golden_signature() -> Result<()> {
    init_logger();

    let signer = RequestSigner::new().with_time(signing_time());
    let headers = signer
        .sign_headers(&Context::new(), &pem_credential(TEST_KEY))
        .await?;

    assert_eq!(headers.date, "Wed, 01 Jan 2020 00:00:00 GMT");
    assert_eq!(
        headers.authorization,
        format!(r#"Signature keyId="/ann/keys/laptop",algorithm="rsa-sha256" {GOLDEN_SIGNATURE}"#)
    );
    Ok(())
}

#[tokio::test]
async fn test_signing_is_deterministic() -> Result<()> {
    init_logger();

    let ctx = Context::new();
    let cred = pem_credential(TEST_KEY);
    let signer = RequestSigner::new().with_time(signing_time());

    let first = signer.sign_headers(&ctx, &cred).await?;
    for _ in 0..3 {
        assert_eq!(signer.sign_headers(&ctx, &cred).await?, first);
    }
    Ok(())
}

#[tokio::test]
async fn test_pkcs8_key_signs_like_pkcs1() -> Result<()> {
    init_logger();

    let signer = RequestSigner::new().with_time(signing_time());
    let headers = signer
        .sign_headers(&Context::new(), &pem_credential(TEST_KEY_PKCS8))
        .await?;

    assert!(headers.authorization.ends_with(GOLDEN_SIGNATURE));
    Ok(())
}

#[tokio::test]
async fn test_sign_with_key_file() -> Result<()> {
    init_logger();

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(TEST_KEY.as_bytes())?;
    let path = file.path().to_string_lossy().to_string();

    let ctx = Context::new().with_file_read(TokioFileRead);
    let cred = Credential::new(
        "https://cloudapi.example.com",
        "ann",
        "laptop",
        PrivateKey::File(path),
    );
    let headers = RequestSigner::new()
        .with_time(signing_time())
        .sign_headers(&ctx, &cred)
        .await?;

    assert!(headers.authorization.ends_with(GOLDEN_SIGNATURE));
    Ok(())
}

#[tokio::test]
async fn test_missing_key_file_fails() {
    init_logger();

    let ctx = Context::new().with_file_read(TokioFileRead);
    let cred = Credential::new(
        "https://cloudapi.example.com",
        "ann",
        "laptop",
        PrivateKey::File("/nonexistent/cloudapi/id_rsa".to_string()),
    );
    let result = RequestSigner::new().sign_headers(&ctx, &cred).await;

    assert!(result.is_err());
}
