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
use cloudapi_triton::types::*;
use cloudapi_triton::{decode, parse_response, ErrorKind};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;

fn response(status: StatusCode, body: &str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from(body.to_string()))
        .unwrap()
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Named {
    name: Option<String>,
}

#[test]
fn test_decode_account_aliases() {
    let account: Account = decode(r#"{"firstName":"Ann","lastName":"Lee"}"#).unwrap();

    assert_eq!(account.first_name.as_deref(), Some("Ann"));
    assert_eq!(account.last_name.as_deref(), Some("Lee"));
    assert_eq!(account.company_name, None);
}

#[test]
fn test_decode_created_timestamp() {
    let key: Key = decode(r#"{"created":"2020-01-01T00:00:00Z"}"#).unwrap();
    assert_eq!(key.created_at.as_deref(), Some("2020-01-01T00:00:00Z"));
}

#[test]
fn test_decode_list_keeps_order() {
    let named: Vec<Named> = decode(r#"[{"name":"a"},{"name":"b"}]"#).unwrap();
    assert_eq!(
        named,
        vec![
            Named {
                name: Some("a".to_string())
            },
            Named {
                name: Some("b".to_string())
            },
        ]
    );
}

#[test]
fn test_missing_fields_decode_as_absent() {
    let machine: Machine = decode("{}").unwrap();
    assert_eq!(machine, Machine::default());

    let machine: Machine = decode(r#"{"id":"m1","unknown":{"deep":[1,2]}}"#).unwrap();
    assert_eq!(machine.id.as_deref(), Some("m1"));
    assert_eq!(machine.name, None);
    assert_eq!(machine.ips, None);
}

#[test]
fn test_round_trip_canonical_record() {
    let mut tags = Attributes::new();
    tags.insert("role".to_string(), json!("web"));
    tags.insert("created".to_string(), json!("by-ops"));
    let mut metadata = Attributes::new();
    metadata.insert("updated".to_string(), json!("2019-12-31"));
    metadata.insert("firstName".to_string(), json!("Ann"));

    let machine = Machine {
        id: Some("m1".to_string()),
        name: Some("web-1".to_string()),
        r#type: Some("smartmachine".to_string()),
        brand: Some("joyent".to_string()),
        state: Some("running".to_string()),
        image: Some("img-1".to_string()),
        package: Some("g4-highcpu-1G".to_string()),
        memory: Some(1024),
        disk: Some(25600),
        ips: Some(vec!["10.0.0.2".to_string()]),
        networks: Some(vec!["net-1".to_string()]),
        primary_ip: Some("10.0.0.2".to_string()),
        metadata: Some(metadata),
        tags: Some(tags),
        docker: Some(false),
        firewall_enabled: Some(true),
        deletion_protection: Some(false),
        compute_node: Some("cn-1".to_string()),
        dns_names: Some(vec!["web-1.inst.example.com".to_string()]),
        free_space: Some(0),
        disks: Some(vec![MachineDisk {
            id: Some("d1".to_string()),
            size: Some(10240),
            boot: Some(true),
            image: Some("img-1".to_string()),
            state: Some("created".to_string()),
        }]),
        created_at: Some("2020-01-01T00:00:00Z".to_string()),
        updated_at: Some("2020-01-02T00:00:00Z".to_string()),
    };

    let body = serde_json::to_string(&machine).unwrap();
    let decoded: Machine = decode(&body).unwrap();
    assert_eq!(decoded, machine);
}

#[test]
fn test_decode_machine_wire_names() {
    let machine: Machine = decode(
        r#"{
            "id": "m1",
            "primaryIp": "165.225.0.1",
            "created": "2020-01-01T00:00:00Z",
            "updated": "2020-01-02T00:00:00Z",
            "tags": {"role": "web"}
        }"#,
    )
    .unwrap();

    assert_eq!(machine.primary_ip.as_deref(), Some("165.225.0.1"));
    assert_eq!(machine.created_at.as_deref(), Some("2020-01-01T00:00:00Z"));
    assert_eq!(machine.updated_at.as_deref(), Some("2020-01-02T00:00:00Z"));
    assert_eq!(
        machine.tags.and_then(|t| t.get("role").cloned()),
        Some(json!("web"))
    );
}

#[test]
fn test_decode_nested_image() {
    let image: Image = decode(
        r#"{
            "id": "img-1",
            "name": "base-64",
            "type": "zone-dataset",
            "requirements": {"min_memory": 512},
            "files": [{"compression": "gzip", "sha1": "abc", "size": 1024}]
        }"#,
    )
    .unwrap();

    assert_eq!(image.r#type.as_deref(), Some("zone-dataset"));
    let requirements = image.requirements.unwrap();
    assert_eq!(requirements.min_memory, Some(512));
    assert_eq!(requirements.max_memory, None);
    assert_eq!(
        image.files,
        Some(vec![ImageFile {
            compression: Some("gzip".to_string()),
            sha1: Some("abc".to_string()),
            size: Some(1024),
        }])
    );
}

#[test]
fn test_decode_nested_role() {
    let role: Role = decode(
        r#"{
            "id": "r1",
            "name": "ops",
            "policies": [{"name": "read"}],
            "members": [{"type": "subuser", "login": "bob", "default": true}]
        }"#,
    )
    .unwrap();

    assert_eq!(
        role.policies,
        Some(vec![RolePolicy {
            id: None,
            name: Some("read".to_string()),
        }])
    );
    let members = role.members.unwrap();
    assert_eq!(members[0].r#type.as_deref(), Some("subuser"));
    assert_eq!(members[0].default, Some(true));
}

#[test]
fn test_decode_migration_timestamps() {
    let migration: Migration = decode(
        r#"{
            "machine": "m1",
            "created_timestamp": "2020-01-01T00:00:00Z",
            "scheduled_timestamp": "2020-01-03T00:00:00Z",
            "progress_history": [{"phase": "sync", "current_progress": 50}]
        }"#,
    )
    .unwrap();

    assert_eq!(migration.created_at.as_deref(), Some("2020-01-01T00:00:00Z"));
    assert_eq!(
        migration.scheduled_at.as_deref(),
        Some("2020-01-03T00:00:00Z")
    );
    assert_eq!(
        migration.progress_history.unwrap()[0].current_progress,
        Some(50)
    );
}

#[test]
fn test_decode_datacenters() {
    let dcs: Datacenters =
        decode(r#"{"us-east-1":"https://us-east-1.api.example.com"}"#).unwrap();
    assert_eq!(
        dcs.get("us-east-1").map(String::as_str),
        Some("https://us-east-1.api.example.com")
    );
}

#[test]
fn test_status_classification() {
    let none: Option<Named> = parse_response(response(StatusCode::NO_CONTENT, "")).unwrap();
    assert_eq!(none, None);

    let named: Named = parse_response(response(StatusCode::OK, r#"{"name":"x"}"#)).unwrap();
    assert_eq!(named.name.as_deref(), Some("x"));

    let err = parse_response::<Named>(response(
        StatusCode::CONFLICT,
        r#"{"code":"InvalidArgument","message":"bad"}"#,
    ))
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    let body = err.body().unwrap();
    assert_eq!(body.code(), Some("InvalidArgument"));
    assert_eq!(body.message(), Some("bad"));
}

#[test]
fn test_type_mismatch_is_decode_error() {
    let err = decode::<Package>(r#"{"memory":"1024"}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.raw(), Some(r#"{"memory":"1024"}"#));
}
