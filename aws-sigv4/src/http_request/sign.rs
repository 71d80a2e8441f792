/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::canonical_request::{
    CanonicalRequest, StringToSign, HMAC_256, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE,
    X_AMZ_SECURITY_TOKEN,
};
use super::error::SigningError;
use super::{PayloadChecksumKind, SigningParams};
use crate::sign::{calculate_signature, generate_signing_key, sha256_hex_string};
use crate::SigningOutput;
use chrono::{DateTime, Utc};
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, Method, Uri};
use std::convert::TryFrom;

/// Represents all of the information necessary to sign an HTTP request.
#[derive(Debug)]
pub struct SignableRequest<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap<HeaderValue>,
    body: SignableBody<'a>,
}

impl<'a> SignableRequest<'a> {
    /// Creates a new `SignableRequest`. If you have an [`http::Request`], then
    /// consider using [`SignableRequest::from`] instead of `new`.
    pub fn new(
        method: &'a Method,
        uri: &'a Uri,
        headers: &'a HeaderMap<HeaderValue>,
        body: SignableBody<'a>,
    ) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    pub fn uri(&self) -> &Uri {
        self.uri
    }

    pub fn method(&self) -> &Method {
        self.method
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        self.headers
    }

    pub fn body(&self) -> &SignableBody<'_> {
        &self.body
    }
}

impl<'a, B> From<&'a http::Request<B>> for SignableRequest<'a>
where
    B: 'a,
    B: AsRef<[u8]>,
{
    fn from(request: &'a http::Request<B>) -> SignableRequest<'a> {
        SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            SignableBody::Bytes(request.body().as_ref()),
        )
    }
}

/// A signable HTTP request body
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum SignableBody<'a> {
    /// A body composed of a slice of bytes
    Bytes(&'a [u8]),

    /// An unsigned payload
    ///
    /// UnsignedPayload is used for streaming requests where the contents of the body cannot be
    /// known prior to signing
    UnsignedPayload,

    /// A precomputed body checksum. The checksum should be a SHA256 checksum of the body,
    /// lowercase hex encoded. Eg:
    /// `e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855`
    Precomputed(String),
}

/// Produces a signature for the given `request` and returns the headers that must be added to
/// the request to carry it.
pub fn sign<'a>(
    request: SignableRequest<'a>,
    params: &'a SigningParams<'a>,
) -> Result<SigningOutput<HeaderMap<HeaderValue>>, SigningError> {
    let date = DateTime::<Utc>::from(params.date_time);
    let creq = CanonicalRequest::from(&request, &params.settings, date, params.security_token)?;
    tracing::trace!(canonical_request = %creq);

    let encoded_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(date, params.region, params.service_name, &encoded_creq);
    let signing_key = generate_signing_key(
        params.secret_key,
        date,
        params.region,
        params.service_name,
    );
    let signature = calculate_signature(signing_key, sts.to_string().as_bytes());
    tracing::trace!(string_to_sign = %sts, "calculated signature");

    let mut headers = HeaderMap::new();
    add_header(&mut headers, X_AMZ_DATE, &creq.date_time, false)?;
    if let Some(security_token) = creq.security_token {
        add_header(&mut headers, X_AMZ_SECURITY_TOKEN, security_token, true)?;
    }
    if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
        add_header(&mut headers, X_AMZ_CONTENT_SHA_256, &creq.content_sha256, false)?;
    }
    // Authorization: algorithm Credential=access key ID/credential scope, SignedHeaders=SignedHeaders, Signature=signature
    let mut authorization = HeaderValue::try_from(format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256, params.access_key, sts.scope, creq.signed_headers, signature
    ))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    Ok(SigningOutput::new(headers, signature))
}

fn add_header(
    map: &mut HeaderMap<HeaderValue>,
    key: &'static str,
    value: &str,
    sensitive: bool,
) -> Result<(), SigningError> {
    let mut value = HeaderValue::try_from(value)?;
    value.set_sensitive(sensitive);
    map.insert(key, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{sign, SignableRequest};
    use crate::date_fmt::parse_date_time;
    use crate::http_request::{PayloadChecksumKind, SigningParams, SigningSettings};
    use http::HeaderValue;
    use std::time::SystemTime;

    fn params(security_token: Option<&'static str>) -> SigningParams<'static> {
        SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            security_token,
            region: "us-east-1",
            service_name: "service",
            date_time: SystemTime::from(parse_date_time("20150830T123600Z").unwrap()),
            settings: SigningSettings::default(),
        }
    }

    #[test]
    fn test_sign_vanilla_with_headers() {
        let params = params(None);
        let original = http::Request::builder()
            .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
            .body("")
            .unwrap();
        let signable = SignableRequest::from(&original);
        let out = sign(signable, &params).unwrap();
        assert_eq!(
            "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500",
            out.signature()
        );
        let headers = out.output();
        assert_eq!(headers.get("x-amz-date").unwrap(), "20150830T123600Z");
        assert_eq!(
            headers.get("authorization").unwrap(),
            "AWS4-HMAC-SHA256 \
                Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
                SignedHeaders=host;x-amz-date, \
                Signature=b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
        );
        assert!(headers.get("host").is_none());
    }

    #[test]
    fn test_sign_headers_utf8() {
        let params = params(None);
        let original = http::Request::builder()
            .uri("https://some-endpoint.some-region.amazonaws.com")
            .header("some-header", HeaderValue::from_str("テスト").unwrap())
            .body("")
            .unwrap();
        let signable = SignableRequest::from(&original);
        let out = sign(signable, &params).unwrap();
        assert_eq!(
            "4596b207a7fc6bdf18725369bc0cd7022cf20efbd2c19730549f42d1a403648e",
            out.signature()
        );
        assert_eq!(
            out.output().get("authorization").unwrap(),
            "AWS4-HMAC-SHA256 \
                Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
                SignedHeaders=host;some-header;x-amz-date, \
                Signature=4596b207a7fc6bdf18725369bc0cd7022cf20efbd2c19730549f42d1a403648e"
        );
    }

    #[test]
    fn session_token_is_signed_and_sensitive() {
        let params = params(Some("notarealsessiontoken"));
        let original = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body("")
            .unwrap();
        let out = sign(SignableRequest::from(&original), &params).unwrap();
        let token = out.output().get("x-amz-security-token").unwrap();
        assert_eq!(token, "notarealsessiontoken");
        assert!(token.is_sensitive());
        let authorization = out.output().get("authorization").unwrap().to_str().unwrap();
        assert!(authorization.contains("SignedHeaders=host;x-amz-date;x-amz-security-token"));
    }

    #[test]
    fn content_sha_header_is_added_when_requested() {
        let mut params = params(None);
        params.settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
        let original = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body("")
            .unwrap();
        let out = sign(SignableRequest::from(&original), &params).unwrap();
        assert_eq!(
            out.output().get("x-amz-content-sha256").unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
