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

/// Machine (instance).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Machine {
    pub id: Option<String>,
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub brand: Option<String>,
    pub state: Option<String>,
    pub image: Option<String>,
    pub package: Option<String>,
    pub memory: Option<u64>,
    pub disk: Option<u64>,
    pub ips: Option<Vec<String>>,
    pub networks: Option<Vec<String>>,
    pub primary_ip: Option<String>,
    pub metadata: Option<Attributes>,
    pub tags: Option<Attributes>,
    pub docker: Option<bool>,
    pub firewall_enabled: Option<bool>,
    pub deletion_protection: Option<bool>,
    pub compute_node: Option<String>,
    pub dns_names: Option<Vec<String>>,
    pub free_space: Option<u64>,
    pub disks: Option<Vec<MachineDisk>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Disk attached to a bhyve machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineDisk {
    pub id: Option<String>,
    pub size: Option<u64>,
    pub boot: Option<bool>,
    pub image: Option<String>,
    pub state: Option<String>,
}

/// Form body of `CreateMachine`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateMachine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub package: String,
    pub image: String,
    /// Comma separated network ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
}

/// Actions accepted by `UpdateMachine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineAction {
    Start,
    Stop,
    Reboot,
}

impl MachineAction {
    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineAction::Start => "start",
            MachineAction::Stop => "stop",
            MachineAction::Reboot => "reboot",
        }
    }
}
