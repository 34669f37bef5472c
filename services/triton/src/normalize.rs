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

//! Rewrite inconsistent CloudAPI field names into the canonical snake_case schema.
//!
//! CloudAPI mixes camelCase and snake_case across resources and renamed
//! timestamp fields between versions. Keys are renamed on the parsed JSON
//! tree, at any depth, so string values are never touched.
//!
//! When several wire names map to the same canonical name, the first one
//! found in [`FIELD_ALIASES`] order wins: a key already in canonical form is
//! kept, then `*_timestamp` beats the bare name. Losing keys stay in place
//! under their wire name.
//!
//! Values of [`FREE_FORM_KEYS`] hold user data, like machine tags, and are
//! left exactly as sent.

use crate::{Error, Result};
use serde_json::{Map, Value};

/// Wire name to canonical name, in priority order.
pub const FIELD_ALIASES: &[(&str, &str)] = &[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("companyName", "company_name"),
    ("primaryIp", "primary_ip"),
    ("created_timestamp", "created_at"),
    ("created", "created_at"),
    ("updated", "updated_at"),
    ("scheduled_timestamp", "scheduled_at"),
];

/// Keys whose values are user supplied maps, never descended into.
pub const FREE_FORM_KEYS: &[&str] = &["tags", "metadata", "routes"];

/// Normalize a raw response body.
///
/// Empty (or whitespace only) bodies are returned unchanged. Anything else
/// must be JSON.
pub fn normalize(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Ok(raw.to_string());
    }

    let mut value: Value = serde_json::from_str(raw)
        .map_err(|e| Error::decode("response body is not valid JSON", raw).with_source(e))?;
    normalize_value(&mut value);
    serde_json::to_string(&value)
        .map_err(|e| Error::decode("failed to serialize normalized body", raw).with_source(e))
}

/// Normalize a parsed JSON value in place.
pub fn normalize_value(value: &mut Value) {
    match value {
        Value::Object(map) => normalize_map(map),
        Value::Array(items) => items.iter_mut().for_each(normalize_value),
        _ => {}
    }
}

fn normalize_map(map: &mut Map<String, Value>) {
    for (from, to) in FIELD_ALIASES {
        if map.contains_key(*to) {
            continue;
        }
        if let Some(v) = map.remove(*from) {
            map.insert(to.to_string(), v);
        }
    }

    for (key, value) in map.iter_mut() {
        if !FREE_FORM_KEYS.contains(&key.as_str()) {
            normalize_value(value);
        }
    }
}
