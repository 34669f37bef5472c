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

/// Machine migration, wire timestamps are `created_timestamp` and
/// `scheduled_timestamp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Migration {
    pub machine: Option<String>,
    pub state: Option<String>,
    pub phase: Option<String>,
    pub automatic: Option<bool>,
    pub error: Option<String>,
    pub progress_history: Option<Vec<MigrationProgress>>,
    pub created_at: Option<String>,
    pub scheduled_at: Option<String>,
    pub finished_timestamp: Option<String>,
}

/// One entry of a migration's progress history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationProgress {
    pub r#type: Option<String>,
    pub phase: Option<String>,
    pub state: Option<String>,
    pub message: Option<String>,
    pub current_progress: Option<u64>,
    pub total_progress: Option<u64>,
    pub started_timestamp: Option<String>,
    pub finished_timestamp: Option<String>,
    pub duration_ms: Option<u64>,
}
