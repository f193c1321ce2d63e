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
use crate::{encode_query, CanonicalRequest, Config, HttpMethod, PrivateKey, Region};
use http::header::{HeaderName, AUTHORIZATION};
use http::{HeaderMap, HeaderValue, Request, Uri};
use log::debug;
use paysign_core::hash::hex_sha256;
use paysign_core::time::{format_iso8601, now, DateTime};
use paysign_core::utils::Redact;
use paysign_core::{Error, Result};
use serde::Serialize;
use std::fmt::{Debug, Formatter, Write};
use std::str::FromStr;

/// RequestSigner that implements Amazon Pay API v2 request signing.
///
/// - [Signing requests](https://developer.amazon.com/docs/amazon-pay-api-v2/signing-requests.html)
///
/// The signer is immutable once built and can be shared between threads.
/// Every call takes a fresh timestamp and a fresh PSS salt.
#[derive(Clone)]
pub struct RequestSigner {
    region: Region,
    public_key_id: String,
    sandbox: bool,
    key: PrivateKey,

    time: Option<DateTime>,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("region", &self.region)
            .field("public_key_id", &Redact::from(&self.public_key_id))
            .field("sandbox", &self.sandbox)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a new signer, parsing the private key of `config`.
    ///
    /// Malformed key material fails here instead of at signing time.
    pub fn new(config: &Config) -> Result<Self> {
        let key = PrivateKey::from_pem(&config.private_key)?;
        debug!("request signer created for {config:?}");

        Ok(Self {
            region: config.region,
            public_key_id: config.public_key_id.clone(),
            sandbox: config.sandbox,
            key,

            time: None,
        })
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Region this signer signs for.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Base url for all API calls: `https://<endpoint>/<sandbox|live>/v2/`
    pub fn base_url(&self) -> String {
        self.region.base_url(self.sandbox)
    }

    /// Build the full url of an API call.
    ///
    /// `query` is an encoded query string as returned by [`encode_query`],
    /// the `?` separator is only added when it's not empty.
    pub fn api_url(&self, url_fragment: &str, query: &str) -> Result<Uri> {
        let mut url = self.base_url();
        url.push_str(url_fragment);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }

        Ok(Uri::from_str(&url)?)
    }

    /// Sign a string and return the base64 encoded signature.
    ///
    /// The signed content is:
    ///
    /// ```shell
    /// AMZN-PAY-RSASSA-PSS
    /// <hex sha256 of input>
    /// ```
    pub fn sign(&self, string_to_sign: &str) -> Result<String> {
        let hashed = {
            let mut f = String::with_capacity(AMAZON_SIGNATURE_ALGORITHM.len() + 65);
            writeln!(f, "{AMAZON_SIGNATURE_ALGORITHM}")?;
            write!(f, "{}", hex_sha256(string_to_sign.as_bytes()))?;
            f
        };
        debug!("calculated string to sign: {hashed}");

        self.key.sign(hashed.as_bytes())
    }

    /// Sign a button payload.
    pub fn sign_payload(&self, payload: &str) -> Result<String> {
        self.sign(payload)
    }

    /// Serialize a structured payload into JSON and sign it.
    ///
    /// Object keys keep the order they are serialized in.
    pub fn sign_payload_json<T: Serialize + ?Sized>(&self, payload: &T) -> Result<String> {
        let payload = serde_json::to_string(payload)?;
        self.sign_payload(&payload)
    }

    /// Sign a request and return the headers that must be sent with it.
    ///
    /// Returned headers contain `accept`, `content-type`, `x-amz-pay-region`,
    /// `x-amz-pay-date`, `x-amz-pay-host` and `authorization`, plus every
    /// header of `headers`. Caller headers can't override the signing headers.
    ///
    /// The canonical query is built from `query_params`, the query part of
    /// `uri` is ignored. A `uri` without path, such as `https://pay-api.amazon.jp`,
    /// is signed with the path `/`.
    pub fn sign_request(
        &self,
        method: &str,
        uri: &Uri,
        body: &[u8],
        headers: &[(&str, &str)],
        query_params: &[(&str, &str)],
    ) -> Result<HeaderMap> {
        let method = HttpMethod::from_str(method)?;
        let query = encode_query(query_params);

        self.signed_headers(method, uri, body, headers, &query)
    }

    /// Build a signed request for an API call.
    ///
    /// The request is not sent; the caller hands it to its own HTTP client.
    pub fn build_request(
        &self,
        method: &str,
        url_fragment: &str,
        body: impl Into<String>,
        headers: &[(&str, &str)],
        query_params: &[(&str, &str)],
    ) -> Result<Request<String>> {
        let method = HttpMethod::from_str(method)?;
        let body = body.into();
        let query = encode_query(query_params);
        let uri = self.api_url(url_fragment, &query)?;

        let signed = self.signed_headers(method, &uri, body.as_bytes(), headers, &query)?;

        let mut req = Request::builder()
            .method(http::Method::from(method))
            .uri(uri)
            .body(body)?;
        *req.headers_mut() = signed;

        Ok(req)
    }

    /// Build a signed request for an API call with a JSON body.
    pub fn build_request_json<T: Serialize + ?Sized>(
        &self,
        method: &str,
        url_fragment: &str,
        payload: &T,
        headers: &[(&str, &str)],
        query_params: &[(&str, &str)],
    ) -> Result<Request<String>> {
        let body = serde_json::to_string(payload)?;
        self.build_request(method, url_fragment, body, headers, query_params)
    }

    fn signed_headers(
        &self,
        method: HttpMethod,
        uri: &Uri,
        body: &[u8],
        headers: &[(&str, &str)],
        query: &str,
    ) -> Result<HeaderMap> {
        let creq = self.canonical_request(method, uri, body, headers, query)?;
        debug!("calculated canonical request: {creq}");

        // Headers must be representable before anything gets signed.
        let mut header_map = HeaderMap::with_capacity(6 + headers.len());
        for (name, value) in creq.headers() {
            header_map.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let signature = self.sign(&creq.to_string())?;

        let mut authorization = HeaderValue::from_str(&format!(
            "{AMAZON_SIGNATURE_ALGORITHM} PublicKeyId={}, SignedHeaders={}, Signature={}",
            self.public_key_id,
            creq.signed_headers(),
            signature
        ))?;
        authorization.set_sensitive(true);
        header_map.insert(AUTHORIZATION, authorization);

        Ok(header_map)
    }

    fn canonical_request(
        &self,
        method: HttpMethod,
        uri: &Uri,
        body: &[u8],
        headers: &[(&str, &str)],
        query: &str,
    ) -> Result<CanonicalRequest> {
        let host = uri
            .host()
            .ok_or_else(|| Error::request_invalid("request without host is invalid for signing"))?;
        let now = self.time.unwrap_or_else(now);

        let mut creq = CanonicalRequest::new(method, uri.path(), query, body);
        for (name, value) in headers {
            creq.insert_header(name, value);
        }
        // Signing headers are written last so that they always win.
        creq.insert_header(http::header::ACCEPT.as_str(), APPLICATION_JSON);
        creq.insert_header(http::header::CONTENT_TYPE.as_str(), APPLICATION_JSON);
        creq.insert_header(X_AMZ_PAY_REGION, self.region.as_str());
        creq.insert_header(X_AMZ_PAY_DATE, &format_iso8601(now));
        creq.insert_header(X_AMZ_PAY_HOST, host);

        Ok(creq)
    }
}
