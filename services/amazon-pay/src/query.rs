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

use crate::constants::QUERY_VALUE_ENCODE_SET;
use percent_encoding::utf8_percent_encode;

/// Encode query params into the sorted query string used both in the url
/// and in the canonical request.
///
/// ```shell
/// [(b, "2"), (a, "x y")] => "a=x%20y&b=2"
/// ```
///
/// Keys are taken as is, values are percent encoded. Entries are sorted by
/// key, entries sharing a key keep their input order. Empty input returns an
/// empty string.
///
/// Reserved characters such as `/`, `:`, `=` and `&` are escaped as well, so a
/// value never splits the query. A URI style encoder that leaves them
/// untouched signs a different canonical query for such values.
pub fn encode_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs = params
        .iter()
        .map(|(k, v)| (k.as_ref(), encode_query_value(v.as_ref())))
        .collect::<Vec<_>>();
    // Sort via param name.
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut s = String::with_capacity(16);
    for (idx, (k, v)) in pairs.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(&v);
    }

    s
}

fn encode_query_value(v: &str) -> String {
    utf8_percent_encode(v, &QUERY_VALUE_ENCODE_SET)
        .to_string()
        .replace("%7E", "~")
}
