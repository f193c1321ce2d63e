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

//! Amazon Pay API v2 request signer
//!
//! ```no_run
//! use paysign_amazon_pay::{Config, Region, RequestSigner};
//!
//! # fn example() -> paysign_core::Result<()> {
//! let config = Config::new(Region::Jp, "SANDBOX-XXXXXXXX", std::fs::read_to_string("privateKey.pem")?)
//!     .with_sandbox(true);
//! let signer = RequestSigner::new(&config)?;
//!
//! // Signature for the checkout button.
//! let signature = signer.sign_payload(r#"{"storeId":"amzn1.application-oa2-client.xxx"}"#)?;
//!
//! // Signed request, ready to be sent by any HTTP client.
//! let req = signer.build_request("GET", "checkoutSessions/xxx", "", &[], &[])?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{AMAZON_SIGNATURE_ALGORITHM, PSS_SALT_LENGTH, X_AMZ_PAY_IDEMPOTENCY_KEY};

mod region;
pub use region::Region;

mod method;
pub use method::HttpMethod;

mod config;
pub use config::Config;

mod key;
pub use key::PrivateKey;

mod query;
pub use query::encode_query;

mod canonical;
pub use canonical::CanonicalRequest;

mod sign_request;
pub use sign_request::RequestSigner;
