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

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use cloudapi_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "triton")]
pub mod triton {
    //! Triton CloudAPI, see [`cloudapi_triton`].

    pub use cloudapi_triton::*;

    /// Client using [`default_context`](crate::default_context) and the
    /// [`DefaultCredentialProvider`] with an empty config, so the
    /// credential comes from the environment.
    #[cfg(feature = "default-context")]
    pub fn default_client() -> Client {
        Client::new(
            crate::default_context(),
            DefaultCredentialProvider::default(),
        )
    }
}
