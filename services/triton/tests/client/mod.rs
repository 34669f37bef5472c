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
use cloudapi_core::Context;
use cloudapi_triton::types::*;
use cloudapi_triton::{Client, ErrorKind, RequestSigner, StaticCredentialProvider};
use http::Method;
use pretty_assertions::assert_eq;

fn client(http: &MockHttpSend) -> Client {
    init_logger();

    Client::with_request_signer(
        Context::new().with_http_send(http.clone()),
        StaticCredentialProvider::new(pem_credential(TEST_KEY)),
        RequestSigner::new().with_time(signing_time()),
    )
}

#[tokio::test]
async fn test_list_machines() -> anyhow::Result<()> {
    let http = MockHttpSend::new(
        StatusCode::OK,
        r#"[
            {"id": "m1", "name": "a", "primaryIp": "10.0.0.1"},
            {"id": "m2", "name": "b", "created": "2020-01-01T00:00:00Z"}
        ]"#,
    );
    let machines = client(&http).list_machines().await?;

    assert_eq!(machines.len(), 2);
    assert_eq!(machines[0].primary_ip.as_deref(), Some("10.0.0.1"));
    assert_eq!(machines[1].created_at.as_deref(), Some("2020-01-01T00:00:00Z"));

    let reqs = http.requests();
    assert_eq!(reqs[0].method(), Method::GET);
    assert_eq!(
        reqs[0].uri().to_string(),
        "https://cloudapi.example.com/ann/machines"
    );
    assert_eq!(
        reqs[0].headers()["authorization"],
        format!(r#"Signature keyId="/ann/keys/laptop",algorithm="rsa-sha256" {GOLDEN_SIGNATURE}"#)
            .as_str()
    );
    Ok(())
}

#[tokio::test]
async fn test_get_account() -> anyhow::Result<()> {
    let http = MockHttpSend::new(
        StatusCode::OK,
        r#"{"login":"ann","firstName":"Ann","companyName":"Example"}"#,
    );
    let account = client(&http).get_account().await?;

    assert_eq!(account.login.as_deref(), Some("ann"));
    assert_eq!(account.company_name.as_deref(), Some("Example"));
    assert_eq!(
        http.requests()[0].uri().to_string(),
        "https://cloudapi.example.com/ann"
    );
    Ok(())
}

#[tokio::test]
async fn test_update_account_uses_wire_names() -> anyhow::Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"firstName":"Ann"}"#);
    let update = UpdateAccount {
        first_name: Some("Ann".to_string()),
        ..Default::default()
    };
    client(&http).update_account(&update).await?;

    let reqs = http.requests();
    assert_eq!(reqs[0].method(), Method::POST);
    assert_eq!(reqs[0].body().as_ref(), b"firstName=Ann");
    Ok(())
}

#[tokio::test]
async fn test_create_machine_form() -> anyhow::Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"id":"m1","state":"provisioning"}"#);
    let req = CreateMachine {
        name: Some("web-1".to_string()),
        package: "g4".to_string(),
        image: "img-1".to_string(),
        ..Default::default()
    };
    let machine = client(&http).create_machine(&req).await?;

    assert_eq!(machine.state.as_deref(), Some("provisioning"));
    assert_eq!(
        http.requests()[0].body().as_ref(),
        b"name=web-1&package=g4&image=img-1"
    );
    Ok(())
}

#[tokio::test]
async fn test_machine_actions() -> anyhow::Result<()> {
    let http = MockHttpSend::new(StatusCode::NO_CONTENT, "");
    let client = client(&http);

    client.start_machine("m1").await?;
    client.stop_machine("m1").await?;
    client.reboot_machine("m1").await?;
    client.delete_machine("m1").await?;

    let reqs = http.requests();
    let bodies: Vec<_> = reqs.iter().map(|r| r.body().clone()).collect();
    assert_eq!(
        bodies,
        vec![
            Bytes::from_static(b"action=start"),
            Bytes::from_static(b"action=stop"),
            Bytes::from_static(b"action=reboot"),
            Bytes::new(),
        ]
    );
    assert_eq!(reqs[3].method(), Method::DELETE);
    assert!(reqs
        .iter()
        .all(|r| r.uri().path() == "/ann/machines/m1"));
    Ok(())
}

#[tokio::test]
async fn test_not_found_is_server_error() {
    let http = MockHttpSend::new(
        StatusCode::NOT_FOUND,
        r#"{"code":"ResourceNotFound","message":"img-1 not found"}"#,
    );
    let err = client(&http).get_image("img-1").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.body().and_then(|b| b.message()), Some("img-1 not found"));
}

#[tokio::test]
async fn test_list_fabric_vlans_path() -> anyhow::Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"[{"vlan_id":2,"name":"default"}]"#);
    let vlans = client(&http).list_fabric_vlans().await?;

    assert_eq!(vlans[0].vlan_id, Some(2));
    assert_eq!(
        http.requests()[0].uri().path(),
        "/ann/fabrics/default/vlans"
    );
    Ok(())
}

#[tokio::test]
async fn test_names_are_escaped_in_path() -> anyhow::Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, r#"{"name":"x"}"#);
    let client = client(&http);

    client.get_key("my key").await?;
    client.get_key("../machines").await?;
    client.get_key("a?b=c").await?;

    let reqs = http.requests();
    let paths: Vec<_> = reqs.iter().map(|r| r.uri().path().to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "/ann/keys/my%20key",
            "/ann/keys/%2E%2E%2Fmachines",
            "/ann/keys/a%3Fb%3Dc",
        ]
    );
    assert!(reqs.iter().all(|r| r.uri().query().is_none()));
    Ok(())
}

#[tokio::test]
async fn test_accepted_machine_action_is_server_error() {
    let http = MockHttpSend::new(StatusCode::ACCEPTED, "");
    let err = client(&http).start_machine("m1").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(StatusCode::ACCEPTED));
    assert_eq!(http.requests().len(), 1);
}
