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

//! Canonical CloudAPI records.
//!
//! Every field is optional: absent keys decode to `None` (or an empty
//! collection) and unknown keys are ignored. Field names are the canonical
//! snake_case names produced by [`normalize`](crate::normalize), never the
//! wire aliases.

mod account;
pub use account::*;

mod datacenter;
pub use datacenter::*;

mod firewall;
pub use firewall::*;

mod image;
pub use image::*;

mod key;
pub use key::*;

mod machine;
pub use machine::*;

mod migration;
pub use migration::*;

mod network;
pub use network::*;

mod package;
pub use package::*;

mod rbac;
pub use rbac::*;

mod volume;
pub use volume::*;

/// Free form `key: value` attributes such as tags and metadata.
pub type Attributes = serde_json::Map<String, serde_json::Value>;
