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

/// Image, with its nested requirements and files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub os: Option<String>,
    pub r#type: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub eula: Option<String>,
    pub owner: Option<String>,
    pub public: Option<bool>,
    pub state: Option<String>,
    pub published_at: Option<String>,
    pub acl: Option<Vec<String>>,
    pub tags: Option<Attributes>,
    pub requirements: Option<ImageRequirements>,
    pub files: Option<Vec<ImageFile>>,
    pub error: Option<ImageError>,
}

/// Constraints a package must meet to run an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRequirements {
    pub min_memory: Option<u64>,
    pub max_memory: Option<u64>,
    pub min_ram: Option<u64>,
    pub max_ram: Option<u64>,
    pub brand: Option<String>,
    pub bootrom: Option<String>,
}

/// One file of an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageFile {
    pub compression: Option<String>,
    pub sha1: Option<String>,
    pub size: Option<u64>,
}

/// Failure reported on an image in `failed` state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageError {
    pub code: Option<String>,
    pub message: Option<String>,
}
