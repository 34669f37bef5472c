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

/// Default private key used when only an identity is configured.
pub const TRITON_DEFAULT_KEY_FILE: &str = "~/.ssh/id_rsa";

/// Environment variables for Triton CloudAPI.
pub const TRITON_URL: &str = "TRITON_URL";
pub const TRITON_ACCOUNT: &str = "TRITON_ACCOUNT";
pub const TRITON_KEY_NAME: &str = "TRITON_KEY_NAME";
pub const TRITON_KEY_FILE: &str = "TRITON_KEY_FILE";

/// Legacy SmartDataCenter names, read when the `TRITON_*` ones are unset.
pub const SDC_URL: &str = "SDC_URL";
pub const SDC_ACCOUNT: &str = "SDC_ACCOUNT";
pub const SDC_KEY_NAME: &str = "SDC_KEY_NAME";
pub const SDC_KEY_FILE: &str = "SDC_KEY_FILE";

/// CloudAPI version range requested on every call.
pub const ACCEPT_VERSION: &str = "~8";
pub const ACCEPT_VERSION_HEADER: &str = "accept-version";

/// Algorithm tag placed in the authorization header.
pub const SIGNING_ALGORITHM: &str = "rsa-sha256";
