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

use crate::constants::*;
use crate::Region;
use log::debug;
use paysign_core::utils::Redact;
use paysign_core::{Env, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for the Amazon Pay API signer.
///
/// Built once at startup and handed to [`crate::RequestSigner::new`], which
/// parses the private key.
#[derive(Clone)]
pub struct Config {
    /// Region of the merchant account.
    pub region: Region,
    /// Public key id obtained from Seller Central.
    pub public_key_id: String,
    /// PEM encoded RSA private key, PKCS#8 or PKCS#1.
    pub private_key: String,
    /// Call the sandbox environment instead of live.
    pub sandbox: bool,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("public_key_id", &Redact::from(&self.public_key_id))
            .field("private_key", &Redact::from(&self.private_key))
            .field("sandbox", &self.sandbox)
            .finish()
    }
}

impl Config {
    /// Create a config for the live environment.
    pub fn new(
        region: Region,
        public_key_id: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            region,
            public_key_id: public_key_id.into(),
            private_key: private_key.into(),
            sandbox: false,
        }
    }

    /// Switch between the sandbox and live environment.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Base url for all API calls, derived from region and environment.
    pub fn base_url(&self) -> String {
        self.region.base_url(self.sandbox)
    }

    /// Load config from environment variables.
    ///
    /// - `AMAZON_PAY_REGION`: `na`, `eu` or `jp`
    /// - `AMAZON_PAY_PUBLIC_KEY_ID`: public key id
    /// - `AMAZON_PAY_PRIVATE_KEY`: PEM private key, or
    /// - `AMAZON_PAY_PRIVATE_KEY_PATH`: path to the PEM private key
    /// - `AMAZON_PAY_SANDBOX`: `true` or `1` to use sandbox, live otherwise
    pub fn from_env(env: &impl Env) -> Result<Self> {
        let region: Region = required(env, AMAZON_PAY_REGION)?.parse()?;
        let public_key_id = required(env, AMAZON_PAY_PUBLIC_KEY_ID)?;

        let private_key = match env.var(AMAZON_PAY_PRIVATE_KEY) {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                let path = required(env, AMAZON_PAY_PRIVATE_KEY_PATH).map_err(|_| {
                    Error::config_invalid(format!(
                        "neither {AMAZON_PAY_PRIVATE_KEY} nor {AMAZON_PAY_PRIVATE_KEY_PATH} is set"
                    ))
                })?;
                let path = env.expand_home_dir(&path).ok_or_else(|| {
                    Error::config_invalid(format!(
                        "failed to expand home dir in private key path {path}"
                    ))
                })?;
                debug!("loading private key from {path}");
                std::fs::read_to_string(&path).map_err(|e| {
                    Error::config_invalid(format!("failed to read private key file {path}"))
                        .with_source(e)
                })?
            }
        };

        let sandbox = match env.var(AMAZON_PAY_SANDBOX) {
            None => false,
            Some(v) => parse_bool(&v).ok_or_else(|| {
                Error::config_invalid(format!(
                    "{AMAZON_PAY_SANDBOX} must be one of true, false, 1 or 0, got '{v}'"
                ))
            })?,
        };

        Ok(Self {
            region,
            public_key_id,
            private_key,
            sandbox,
        })
    }
}

fn required(env: &impl Env, key: &str) -> Result<String> {
    env.var(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::config_invalid(format!("{key} is not set")))
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" | "" => Some(false),
        _ => None,
    }
}
