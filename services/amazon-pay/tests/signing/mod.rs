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

use super::*;
use paysign_core::time::now;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_case::test_case;

#[test_case("GET", b"" ; "get")]
#[test_case("POST", br#"{"webCheckoutDetails":{"checkoutReviewReturnUrl":"https://a.com/review"}}"# ; "post")]
#[test_case("PUT", b"{}" ; "put")]
#[test_case("PATCH", br#"{"chargeAmount":{"amount":"100","currencyCode":"JPY"}}"# ; "patch")]
#[test_case("DELETE", b"" ; "delete")]
fn test_signature_verifies(method: &str, body: &[u8]) {
    let signer = init_signer(Region::Jp, true);
    let uri = signer
        .api_url("checkoutSessions/abc-123", "")
        .expect("url must be valid");

    let headers = signer
        .sign_request(method, &uri, body, &[], &[])
        .expect("sign request must success");

    let verified = verify_request(
        method,
        "/sandbox/v2/checkoutSessions/abc-123",
        &[],
        body,
        &headers,
    )
    .expect("verify must success");
    assert!(verified);
}

#[test]
fn test_signature_fails_on_tampered_body() -> Result<()> {
    let signer = init_signer(Region::Eu, false);
    let uri = signer.api_url("charges", "")?;

    let headers = signer.sign_request("POST", &uri, br#"{"amount":"1"}"#, &[], &[])?;

    assert!(!verify_request(
        "POST",
        "/live/v2/charges",
        &[],
        br#"{"amount":"2"}"#,
        &headers
    )?);
    Ok(())
}

#[test]
fn test_signature_with_query() -> Result<()> {
    let signer = init_signer(Region::Na, false);
    let query_params = [("pageSize", "10"), ("nextToken", "a b~c/d")];
    let uri = signer.api_url("charges", &encode_query(&query_params))?;
    assert_eq!(uri.query(), Some("nextToken=a%20b~c%2Fd&pageSize=10"));

    let headers = signer.sign_request("GET", &uri, b"", &[], &query_params)?;

    assert!(verify_request(
        "GET",
        "/live/v2/charges",
        &query_params,
        b"",
        &headers
    )?);
    // A different query must not verify.
    assert!(!verify_request(
        "GET",
        "/live/v2/charges",
        &[("pageSize", "20")],
        b"",
        &headers
    )?);
    Ok(())
}

#[test]
fn test_header_order_and_case_do_not_matter() -> Result<()> {
    let signer = init_signer(Region::Jp, true);
    let uri = signer.api_url("checkoutSessions", "")?;
    let body = br#"{"storeId":"amzn1.application-oa2-client.test"}"#;

    let headers = signer.sign_request(
        "POST",
        &uri,
        body,
        &[("X-Amz-Pay-Idempotency-Key", "key-1"), ("X-Custom", "v")],
        &[],
    )?;
    let (_, signed_headers, _) = parse_authorization(&headers)?;
    assert_eq!(
        signed_headers,
        "accept;content-type;x-amz-pay-date;x-amz-pay-host;x-amz-pay-idempotency-key;x-amz-pay-region;x-custom"
    );

    // Rebuild the canonical request with the headers reversed and upper cased.
    let (_, _, signature) = parse_authorization(&headers)?;
    let mut creq =
        CanonicalRequest::new(HttpMethod::Post, "/sandbox/v2/checkoutSessions", "", body);
    let mut pairs = Vec::new();
    for (k, v) in &headers {
        if k != AUTHORIZATION {
            pairs.push((k.as_str().to_uppercase(), v.to_str()?.to_string()));
        }
    }
    pairs.reverse();
    for (k, v) in &pairs {
        creq.insert_header(k, v);
    }

    assert!(verify_signature(&creq.to_string(), &signature));
    Ok(())
}

#[test]
fn test_account_management_ignores_body() -> Result<()> {
    let signer = init_signer(Region::Jp, false);
    let uri = signer.api_url("account-management/v2/accounts", "")?;

    let headers = signer.sign_request("POST", &uri, br#"{"uniqueReferenceId":"r-1"}"#, &[], &[])?;

    // The server side sees an empty hashed body.
    assert!(verify_request(
        "POST",
        "/live/v2/account-management/v2/accounts",
        &[],
        b"",
        &headers
    )?);
    assert!(verify_request(
        "POST",
        "/live/v2/account-management/v2/accounts",
        &[],
        br#"{"uniqueReferenceId":"r-2"}"#,
        &headers
    )?);
    Ok(())
}

#[test]
fn test_date_header_is_current() -> Result<()> {
    let signer = init_signer(Region::Jp, true);
    let uri = signer.api_url("buyers/token", "")?;

    let before = now();
    let headers = signer.sign_request("GET", &uri, b"", &[], &[])?;
    let after = now();

    let date = chrono::NaiveDateTime::parse_from_str(
        headers["x-amz-pay-date"].to_str()?,
        "%Y%m%dT%H%M%SZ",
    )?
    .and_utc();
    assert!(date.timestamp() >= before.timestamp());
    assert!(date.timestamp() <= after.timestamp());
    Ok(())
}

#[test]
fn test_sign_payload_verifies() -> Result<()> {
    let signer = init_signer(Region::Jp, true);
    let payload = r#"{"webCheckoutDetails":{"checkoutReviewReturnUrl":"https://a.com/review"},"storeId":"amzn1.application-oa2-client.test"}"#;

    let signature = signer.sign_payload(payload)?;

    assert!(verify_signature(payload, &signature));
    assert!(!verify_signature(&format!("{payload} "), &signature));
    Ok(())
}

#[test]
fn test_signer_shared_between_threads() -> Result<()> {
    let signer = Arc::new(init_signer(Region::Eu, true));

    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|i| {
                let signer = signer.clone();
                s.spawn(move || -> Result<bool> {
                    let path = format!("chargePermissions/S02-{i}");
                    let uri = signer.api_url(&path, "")?;
                    let headers = signer.sign_request("GET", &uri, b"", &[], &[])?;
                    verify_request("GET", &format!("/sandbox/v2/{path}"), &[], b"", &headers)
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            let verified = handle.join().expect("thread must not panic")?;
            assert!(verified);
        }
        Ok(())
    })
}
