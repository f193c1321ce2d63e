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

//! Time related utils.

use chrono::SecondsFormat;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with the separators stripped: "20220313T072004Z"
///
/// The extended form "2022-03-13T07:20:04Z" is produced first and every `-`
/// and `:` is then removed, so the result carries whole seconds only.
pub fn format_iso8601(t: DateTime) -> String {
    format_iso8601_extended(t).replace(['-', ':'], "")
}

/// Format time into ISO 8601 extended form: "2022-03-13T07:20:04Z"
pub fn format_iso8601_extended(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
