/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error shape parsing for the AWS JSON protocols (`awsJson1_0`, `awsJson1_1` and `restJson1`).

use bytes::Bytes;
use http::header::HeaderName;
use http::{HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use smithy_types::Error as GenericError;

lazy_static::lazy_static! {
    static ref X_AMZN_ERROR_TYPE: HeaderName = HeaderName::from_static("x-amzn-errortype");
    static ref X_AMZN_REQUEST_ID: HeaderName = HeaderName::from_static("x-amzn-requestid");
    static ref X_AMZ_REQUEST_ID: HeaderName = HeaderName::from_static("x-amz-request-id");
}

/// Strip the namespace and URI decorations some services add to error codes.
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header_str<'a>(headers: &'a HeaderMap<HeaderValue>, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn body_str<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| body.get(*key).and_then(|value| value.as_str()))
}

/// Parse the generic error metadata of an error response.
///
/// The error code is read from the `x-amzn-errortype` header, falling back to the `__type` or
/// `code` members of the JSON body. The message is read from `message` (any casing) and the
/// request id from the `x-amzn-requestid` or `x-amz-request-id` headers. A body that is not a
/// JSON object contributes nothing.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> GenericError {
    let body: Map<String, Value> = match serde_json::from_slice(response.body()) {
        Ok(Value::Object(body)) => body,
        _ => Map::new(),
    };
    let code = header_str(response.headers(), &X_AMZN_ERROR_TYPE)
        .or_else(|| body_str(&body, &["code", "__type", "Code"]))
        .map(sanitize_error_code)
        .filter(|code| !code.is_empty());
    let message = body_str(&body, &["message", "Message", "errorMessage"]);
    let request_id = header_str(response.headers(), &X_AMZN_REQUEST_ID)
        .or_else(|| header_str(response.headers(), &X_AMZ_REQUEST_ID));
    GenericError {
        code: code.map(str::to_string),
        message: message.map(str::to_string),
        request_id: request_id.map(str::to_string),
    }
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("X-Amzn-Requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("FooError"));
        assert_eq!(err.message(), Some("Go to foo"));
        assert_eq!(err.request_id(), Some("1234"));
    }

    #[test]
    fn error_type_header_wins() {
        let response = http::Response::builder()
            .header(
                "x-amzn-errortype",
                "ThrottlingException:http://internal.amazon.com/coral/com.amazon.coral.validate/",
            )
            .body(Bytes::from_static(
                br#"{ "__type": "SomethingElse", "Message": "slow down" }"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));
    }

    #[test]
    fn empty_or_invalid_bodies() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::from_static(b"<html>oops</html>"))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError:"), "FooError");
    }
}
