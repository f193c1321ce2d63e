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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Algorithm id placed in front of every string to sign and the authorization header.
pub const AMAZON_SIGNATURE_ALGORITHM: &str = "AMZN-PAY-RSASSA-PSS";
/// Version segment of every API url.
pub const API_VERSION: &str = "v2";
/// Salt length in bytes used by the PSS padding.
pub const PSS_SALT_LENGTH: usize = 20;

// Headers used in amazon pay api.
pub const X_AMZ_PAY_REGION: &str = "x-amz-pay-region";
pub const X_AMZ_PAY_DATE: &str = "x-amz-pay-date";
pub const X_AMZ_PAY_HOST: &str = "x-amz-pay-host";
pub const APPLICATION_JSON: &str = "application/json";

/// Caller supplied header that makes a mutating call safely retryable.
pub const X_AMZ_PAY_IDEMPOTENCY_KEY: &str = "x-amz-pay-idempotency-key";

/// Requests under this path are signed with the hash of an empty body.
pub const ACCOUNT_MANAGEMENT_PATH: &str = "account-management/v2/accounts";

// Env values used by `Config::from_env`.
pub const AMAZON_PAY_REGION: &str = "AMAZON_PAY_REGION";
pub const AMAZON_PAY_PUBLIC_KEY_ID: &str = "AMAZON_PAY_PUBLIC_KEY_ID";
pub const AMAZON_PAY_PRIVATE_KEY: &str = "AMAZON_PAY_PRIVATE_KEY";
pub const AMAZON_PAY_PRIVATE_KEY_PATH: &str = "AMAZON_PAY_PRIVATE_KEY_PATH";
pub const AMAZON_PAY_SANDBOX: &str = "AMAZON_PAY_SANDBOX";

/// AsciiSet for query values.
///
/// - Encode every byte except 'A'-'Z', 'a'-'z', '0'-'9', '-', '.' and '_'.
/// - '~' is encoded here and turned back into '~' after encoding.
pub static QUERY_VALUE_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');
