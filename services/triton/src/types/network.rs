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

use serde::{Deserialize, Serialize};

/// Network, public or fabric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub id: Option<String>,
    pub name: Option<String>,
    pub public: Option<bool>,
    pub fabric: Option<bool>,
    pub description: Option<String>,
    pub subnet: Option<String>,
    pub provision_start_ip: Option<String>,
    pub provision_end_ip: Option<String>,
    pub gateway: Option<String>,
    pub resolvers: Option<Vec<String>>,
    pub routes: Option<super::Attributes>,
    pub internet_nat: Option<bool>,
    pub vlan_id: Option<u16>,
}

/// Fabric VLAN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vlan {
    pub vlan_id: Option<u16>,
    pub name: Option<String>,
    pub description: Option<String>,
}
