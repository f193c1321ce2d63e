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

//! Core components for signing payment API requests.
//!
//! This crate provides the service independent building blocks used by the
//! paysign service crates:
//!
//! - [`Error`] and [`ErrorKind`]: the error type shared by every signer.
//! - [`Env`]: an abstraction over environment variables so configuration can
//!   be loaded from the process env ([`OsEnv`]) or a fixed map ([`StaticEnv`]).
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 digest and base64 helpers
//! - [`time`]: Time helpers producing the compact ISO 8601 form used in signing
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::{Env, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
