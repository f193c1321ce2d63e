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

use crate::constants::API_VERSION;
use paysign_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Region that hosts the merchant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// North America, `na`.
    Na,
    /// Europe, `eu`.
    Eu,
    /// Japan, `jp`.
    Jp,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 3] = [Region::Na, Region::Eu, Region::Jp];

    /// Region code as sent in the `x-amz-pay-region` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Jp => "jp",
        }
    }

    /// Host name of the API endpoint for this region.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Region::Na => "pay-api.amazon.com",
            Region::Eu => "pay-api.amazon.eu",
            Region::Jp => "pay-api.amazon.jp",
        }
    }

    /// Base url for all API calls: `https://<endpoint>/<sandbox|live>/v2/`
    pub fn base_url(&self, sandbox: bool) -> String {
        let environment = if sandbox { "sandbox" } else { "live" };
        format!("https://{}/{environment}/{API_VERSION}/", self.endpoint())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                let allowed = Region::ALL.map(|r| r.as_str());
                Error::config_invalid(format!(
                    "Unknown region, '{s}'. The region should be one of follows: {allowed:?}."
                ))
            })
    }
}
