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

use super::Attributes;
use serde::{Deserialize, Serialize};

/// NFS shared volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub id: Option<String>,
    pub name: Option<String>,
    pub owner_uuid: Option<String>,
    pub r#type: Option<String>,
    pub size: Option<u64>,
    pub state: Option<String>,
    pub networks: Option<Vec<String>>,
    pub filesystem_path: Option<String>,
    pub refs: Option<Vec<String>>,
    pub tags: Option<Attributes>,
    pub created_at: Option<String>,
}
