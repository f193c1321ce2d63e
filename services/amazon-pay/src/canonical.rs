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

use crate::constants::ACCOUNT_MANAGEMENT_PATH;
use crate::HttpMethod;
use paysign_core::hash::hex_sha256;
use std::collections::BTreeMap;
use std::fmt;

/// CanonicalRequest is the exact form of a request that gets hashed and signed.
///
/// ```shell
/// <method>
/// <path>
/// <query>
/// <name>:<value>      (one line per header, sorted by name)
///
/// <name>;<name>;...
/// <hex sha256 of body>
/// ```
///
/// Header names are lower cased and deduplicated, the last value written for
/// a name wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: HttpMethod,
    path: String,
    query: String,
    headers: BTreeMap<String, String>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Create a canonical request without headers.
    ///
    /// `query` is the already encoded query string, see [`crate::encode_query`].
    /// Requests under `account-management/v2/accounts` hash an empty body
    /// whatever `body` holds.
    pub fn new(method: HttpMethod, path: &str, query: &str, body: &[u8]) -> Self {
        let hashed_body = if path.contains(ACCOUNT_MANAGEMENT_PATH) {
            b"".as_slice()
        } else {
            body
        };

        Self {
            method,
            path: path.to_string(),
            query: query.to_string(),
            headers: BTreeMap::new(),
            payload_hash: hex_sha256(hashed_body),
        }
    }

    /// Insert a header, replacing any previous value of the same name.
    ///
    /// The name is lower cased and runs of whitespace in the value are
    /// collapsed into a single space.
    pub fn insert_header(&mut self, name: &str, value: &str) {
        self.headers
            .insert(name.to_lowercase(), collapse_whitespace(value));
    }

    /// HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Encoded query string, empty if the request carries no query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Canonical headers sorted by name.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Hex encoded SHA256 of the hashed body.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Sorted header names joined by `;`.
    pub fn signed_headers(&self) -> String {
        self.headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.query)?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers())?;
        write!(f, "{}", self.payload_hash)
    }
}

/// Collapse every run of whitespace into a single space.
///
/// Leading and trailing whitespace is collapsed too, not trimmed.
fn collapse_whitespace(value: &str) -> String {
    let mut s = String::with_capacity(value.len());
    let mut in_whitespace = false;

    for c in value.chars() {
        if matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c') {
            if !in_whitespace {
                s.push(' ');
            }
            in_whitespace = true;
        } else {
            s.push(c);
            in_whitespace = false;
        }
    }

    s
}
