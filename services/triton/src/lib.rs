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

//! Triton CloudAPI client.
//!
//! The crate is built around two capabilities:
//!
//! - [`RequestSigner`] attaches an HTTP signature (`Date` + `Authorization`)
//!   produced with the account's RSA key.
//! - [`parse_response`] classifies a raw response, rewrites inconsistent wire
//!   field names (see [`normalize`]) and decodes the result into typed records.
//!
//! [`Client`] wires both together with a transport from [`cloudapi_core::Context`].
//!
//! ```no_run
//! use cloudapi_core::Context;
//! use cloudapi_triton::{Client, Config, DefaultCredentialProvider};
//!
//! # async fn example(ctx: Context) -> cloudapi_triton::Result<()> {
//! let config = Config::new()
//!     .with_endpoint("https://us-east-1.api.example.com")
//!     .with_account("ann")
//!     .with_key_name("laptop");
//! let client = Client::new(ctx, DefaultCredentialProvider::new(config));
//!
//! for machine in client.list_machines().await? {
//!     println!("{:?} {:?}", machine.name, machine.primary_ip);
//! }
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod key;
pub use key::PrivateKey;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::RequestSigner;
pub use sign_request::SignedHeaders;

mod error;
pub use error::Error;
pub use error::ErrorBody;
pub use error::ErrorKind;
pub use error::Result;

pub mod normalize;

mod response;
pub use response::decode;
pub use response::is_success;
pub use response::parse_response;

pub mod types;

mod client;
pub use client::Client;
mod operations;
