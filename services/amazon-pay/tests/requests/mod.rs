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
use http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_build_request() -> Result<()> {
    let signer = init_signer(Region::Jp, true);
    let body = r#"{"chargeAmount":{"amount":"29980","currencyCode":"JPY"}}"#;

    let req = signer.build_request(
        "PATCH",
        "checkoutSessions/abc",
        body,
        &[("x-amz-pay-idempotency-key", "idem-1")],
        &[],
    )?;

    assert_eq!(req.method(), Method::PATCH);
    assert_eq!(
        req.uri().to_string(),
        "https://pay-api.amazon.jp/sandbox/v2/checkoutSessions/abc"
    );
    assert_eq!(req.body(), body);
    assert_eq!(req.headers()["x-amz-pay-idempotency-key"], "idem-1");
    assert_eq!(req.headers()["x-amz-pay-host"], "pay-api.amazon.jp");

    assert!(verify_request(
        "PATCH",
        req.uri().path(),
        &[],
        req.body().as_bytes(),
        req.headers()
    )?);
    Ok(())
}

#[test]
fn test_build_request_with_query() -> Result<()> {
    let signer = init_signer(Region::Na, false);
    let query_params = [
        ("merchantId", "M1"),
        ("endDate", "2024-01-31"),
        ("startDate", "2024-01-01"),
    ];

    let req = signer.build_request("GET", "reports", "", &[], &query_params)?;

    assert_eq!(
        req.uri().to_string(),
        "https://pay-api.amazon.com/live/v2/reports?endDate=2024-01-31&merchantId=M1&startDate=2024-01-01"
    );
    assert_eq!(req.body(), "");
    assert!(verify_request(
        "GET",
        req.uri().path(),
        &query_params,
        b"",
        req.headers()
    )?);
    Ok(())
}

#[test]
fn test_build_request_json() -> Result<()> {
    let signer = init_signer(Region::Eu, true);
    let payload = json!({
        "webCheckoutDetails": {
            "checkoutReviewReturnUrl": "https://a.com/review"
        },
        "storeId": "amzn1.application-oa2-client.test"
    });

    let req = signer.build_request_json("POST", "checkoutSessions", &payload, &[], &[])?;

    assert_eq!(req.method(), Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "https://pay-api.amazon.eu/sandbox/v2/checkoutSessions"
    );
    // Keys keep their insertion order.
    assert_eq!(
        req.body(),
        r#"{"webCheckoutDetails":{"checkoutReviewReturnUrl":"https://a.com/review"},"storeId":"amzn1.application-oa2-client.test"}"#
    );
    assert!(verify_request(
        "POST",
        req.uri().path(),
        &[],
        req.body().as_bytes(),
        req.headers()
    )?);
    Ok(())
}

#[test]
fn test_build_request_unknown_method() {
    let signer = init_signer(Region::Jp, true);

    let err = signer
        .build_request("HEAD", "checkoutSessions/abc", "", &[], &[])
        .expect_err("HEAD must be rejected");
    assert_eq!(err.kind(), paysign_core::ErrorKind::ConfigInvalid);
}

#[test]
fn test_base_urls() {
    for (region, sandbox, expected) in [
        (Region::Na, false, "https://pay-api.amazon.com/live/v2/"),
        (Region::Na, true, "https://pay-api.amazon.com/sandbox/v2/"),
        (Region::Eu, false, "https://pay-api.amazon.eu/live/v2/"),
        (Region::Jp, true, "https://pay-api.amazon.jp/sandbox/v2/"),
    ] {
        assert_eq!(init_signer(region, sandbox).base_url(), expected);
    }
}
