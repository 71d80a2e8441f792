/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::error::SigningError;
use super::sign::{SignableBody, SignableRequest};
use super::url_escape::percent_encode;
use super::{PayloadChecksumKind, SigningSettings, UriEncoding};
use crate::date_fmt::{format_date, format_date_time};
use crate::sign::sha256_hex_string;
use chrono::{DateTime, Utc};
use http::header::{HeaderName, HOST, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method, Uri};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

pub(crate) const HMAC_256: &str = "AWS4-HMAC-SHA256";
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";

const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

#[derive(Debug, PartialEq)]
pub(crate) struct CanonicalRequest<'a> {
    pub(crate) method: &'a Method,
    pub(crate) path: String,
    pub(crate) params: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) signed_headers: SignedHeaders,
    pub(crate) date_time: String,
    pub(crate) security_token: Option<&'a str>,
    pub(crate) content_sha256: Cow<'a, str>,
}

impl<'a> CanonicalRequest<'a> {
    /// Construct a CanonicalRequest from a SignableRequest
    ///
    /// ## Behavior
    /// There are several settings which alter signing behavior:
    /// - If a `security_token` is provided as part of the credentials it will be included in the signed headers
    /// - If `settings.uri_encoding` specifies double encoding, `%` in the URL will be rencoded as
    /// `%25`
    /// - If settings.payload_checksum_kind is XAmzSha256, add a x-amz-content-sha256 with the body
    /// checksum. This is the same checksum used as the "payload_hash" in the canonical request
    pub(crate) fn from<'b>(
        req: &'b SignableRequest<'b>,
        settings: &SigningSettings,
        date: DateTime<Utc>,
        security_token: Option<&'b str>,
    ) -> Result<CanonicalRequest<'b>, SigningError> {
        let path = match req.uri().path() {
            "" => "/",
            path => path,
        };
        let path = match settings.uri_encoding {
            // The string is already URI encoded, we don't need to encode everything again, just `%`
            UriEncoding::Double => path.replace('%', "%25"),
            UriEncoding::Single => path.to_string(),
        };
        let payload_hash = Self::payload_hash(req.body());

        let date_time = format_date_time(&date);
        let (signed_headers, canonical_headers) =
            Self::headers(req, settings, &payload_hash, &date_time, security_token)?;
        Ok(CanonicalRequest {
            method: req.method(),
            path,
            params: Self::params(req.uri()),
            headers: canonical_headers,
            signed_headers: SignedHeaders::new(signed_headers),
            date_time,
            security_token,
            content_sha256: payload_hash,
        })
    }

    fn headers(
        req: &SignableRequest,
        settings: &SigningSettings,
        payload_hash: &str,
        date_time: &str,
        security_token: Option<&str>,
    ) -> Result<(Vec<CanonicalHeaderName>, HeaderMap), SigningError> {
        // The canonical request will include headers not present in the input:
        // host, x-amz-date, x-amz-security-token (if provided) and
        // x-amz-content-sha256 (if requested by signing settings)
        let mut canonical_headers = req.headers().clone();
        Self::insert_host_header(&mut canonical_headers, req.uri())?;
        canonical_headers.insert(
            HeaderName::from_static(X_AMZ_DATE),
            HeaderValue::try_from(date_time)?,
        );

        if let Some(security_token) = security_token {
            let mut sec_header = HeaderValue::from_str(security_token)?;
            sec_header.set_sensitive(true);
            canonical_headers.insert(X_AMZ_SECURITY_TOKEN, sec_header);
        }

        if settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            let header = HeaderValue::from_str(payload_hash)?;
            canonical_headers.insert(X_AMZ_CONTENT_SHA_256, header);
        }

        let mut signed_headers = Vec::with_capacity(canonical_headers.keys_len());
        for name in canonical_headers.keys() {
            // The user agent header should not be signed because it may be altered by proxies
            if name != USER_AGENT {
                signed_headers.push(CanonicalHeaderName(name.clone()));
            }
        }
        Ok((signed_headers, canonical_headers))
    }

    fn payload_hash<'b>(body: &'b SignableBody<'b>) -> Cow<'b, str> {
        match body {
            SignableBody::Bytes(data) => Cow::Owned(sha256_hex_string(data)),
            SignableBody::Precomputed(digest) => Cow::Borrowed(digest.as_str()),
            SignableBody::UnsignedPayload => Cow::Borrowed(UNSIGNED_PAYLOAD),
        }
    }

    fn params(uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        let mut params: Vec<(Cow<str>, Cow<str>)> =
            form_urlencoded::parse(query.as_bytes()).collect();
        // Sort by param name, and then by param value
        params.sort();
        let encoded: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
            .collect();
        Some(encoded.join("&"))
    }

    fn insert_host_header(
        canonical_headers: &mut HeaderMap<HeaderValue>,
        uri: &Uri,
    ) -> Result<(), SigningError> {
        if canonical_headers.contains_key(&HOST) {
            return Ok(());
        }
        let authority = uri.authority().ok_or_else(SigningError::missing_authority)?;
        let header = HeaderValue::try_from(authority.as_str())?;
        canonical_headers.insert(HOST, header);
        Ok(())
    }

    /// Header values are trimmed and runs of spaces are collapsed; repeated headers are joined with `,`.
    fn header_value(&self, name: &HeaderName) -> String {
        self.headers
            .get_all(name)
            .iter()
            .map(|value| {
                let value = String::from_utf8_lossy(value.as_bytes());
                value.split_whitespace().collect::<Vec<_>>().join(" ")
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<'a> fmt::Display for CanonicalRequest<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params.as_deref().unwrap_or(""))?;
        for header in &self.signed_headers.inner {
            writeln!(f, "{}:{}", header.0.as_str(), self.header_value(&header.0))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.content_sha256)?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Default)]
pub(crate) struct SignedHeaders {
    inner: Vec<CanonicalHeaderName>,
}

impl SignedHeaders {
    fn new(mut inner: Vec<CanonicalHeaderName>) -> Self {
        inner.sort();
        SignedHeaders { inner }
    }
}

impl fmt::Display for SignedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.inner.iter().peekable();
        while let Some(next) = iter.next() {
            match iter.peek().is_some() {
                true => write!(f, "{};", next.0.as_str())?,
                false => write!(f, "{}", next.0.as_str())?,
            };
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct CanonicalHeaderName(HeaderName);

impl PartialOrd for CanonicalHeaderName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalHeaderName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_str().cmp(other.0.as_str())
    }
}

#[derive(PartialEq, Debug, Clone)]
pub(crate) struct Scope<'a> {
    pub(crate) date: DateTime<Utc>,
    pub(crate) region: &'a str,
    pub(crate) service: &'a str,
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            format_date(&self.date),
            self.region,
            self.service
        )
    }
}

#[derive(PartialEq, Debug)]
pub(crate) struct StringToSign<'a> {
    pub(crate) scope: Scope<'a>,
    pub(crate) date: DateTime<Utc>,
    pub(crate) hashed_creq: &'a str,
}

impl<'a> StringToSign<'a> {
    pub(crate) fn new(
        date: DateTime<Utc>,
        region: &'a str,
        service: &'a str,
        hashed_creq: &'a str,
    ) -> Self {
        let scope = Scope {
            date,
            region,
            service,
        };
        Self {
            scope,
            date,
            hashed_creq,
        }
    }
}

impl<'a> fmt::Display for StringToSign<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256,
            format_date_time(&self.date),
            self.scope,
            self.hashed_creq
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::date_fmt::parse_date_time;
    use crate::http_request::canonical_request::{CanonicalRequest, Scope, StringToSign};
    use crate::http_request::sign::{SignableBody, SignableRequest};
    use crate::http_request::{PayloadChecksumKind, SigningSettings, UriEncoding};
    use crate::sign::sha256_hex_string;

    const VANILLA_QUERY_CREQ: &str = "GET
/
Param1=value1&Param2=value2
host:example.amazonaws.com
x-amz-date:20150830T123600Z

host;x-amz-date
e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn vanilla_query_request() -> http::Request<&'static str> {
        http::Request::builder()
            .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
            .body("")
            .unwrap()
    }

    #[test]
    fn test_canonical_request() {
        let req = vanilla_query_request();
        let req = SignableRequest::from(&req);
        let date = parse_date_time("20150830T123600Z").unwrap();
        let creq = CanonicalRequest::from(&req, &SigningSettings::default(), date, None).unwrap();
        assert_eq!(creq.to_string(), VANILLA_QUERY_CREQ);
    }

    #[test]
    fn test_set_xamz_sha_256() {
        let req = vanilla_query_request();
        let req = SignableRequest::from(&req);
        let date = parse_date_time("20150830T123600Z").unwrap();
        let mut signing_settings = SigningSettings {
            payload_checksum_kind: PayloadChecksumKind::XAmzSha256,
            ..Default::default()
        };
        let creq = CanonicalRequest::from(&req, &signing_settings, date, None).unwrap();
        assert_eq!(
            &creq.content_sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            creq.signed_headers.to_string(),
            "host;x-amz-content-sha256;x-amz-date"
        );

        signing_settings.payload_checksum_kind = PayloadChecksumKind::NoHeader;
        let creq = CanonicalRequest::from(&req, &signing_settings, date, None).unwrap();
        assert_eq!(creq.signed_headers.to_string(), "host;x-amz-date");
    }

    #[test]
    fn test_unsigned_payload() {
        let req = vanilla_query_request();
        let req = SignableRequest::new(
            req.method(),
            req.uri(),
            req.headers(),
            SignableBody::UnsignedPayload,
        );
        let date = parse_date_time("20150830T123600Z").unwrap();
        let creq = CanonicalRequest::from(&req, &SigningSettings::default(), date, None).unwrap();
        assert_eq!(&creq.content_sha256, "UNSIGNED-PAYLOAD");
        assert!(creq.to_string().ends_with("UNSIGNED-PAYLOAD"));
    }

    #[test]
    fn test_precomputed_payload() {
        let payload_hash = "44ce7dd67c959e0d3524ffac1771dfbba87d2b6b4b4e99e42034a8b803f8b072";
        let req = vanilla_query_request();
        let req = SignableRequest::new(
            req.method(),
            req.uri(),
            req.headers(),
            SignableBody::Precomputed(String::from(payload_hash)),
        );
        let date = parse_date_time("20150830T123600Z").unwrap();
        let creq = CanonicalRequest::from(&req, &SigningSettings::default(), date, None).unwrap();
        assert_eq!(&creq.content_sha256, payload_hash);
        assert!(creq.to_string().ends_with(payload_hash));
    }

    #[test]
    fn test_generate_scope() {
        let expected = "20150830/us-east-1/iam/aws4_request";
        let date = parse_date_time("20150830T123600Z").unwrap();
        let scope = Scope {
            date,
            region: "us-east-1",
            service: "iam",
        };
        assert_eq!(scope.to_string(), expected);
    }

    #[test]
    fn test_string_to_sign() {
        let date = parse_date_time("20150830T123600Z").unwrap();
        let encoded = sha256_hex_string(VANILLA_QUERY_CREQ.as_bytes());
        assert_eq!(
            encoded,
            "816cd5b414d056048ba4f7c5386d6e0533120fb1fcfa93762cf0fc39e2cf19e0"
        );

        let actual = StringToSign::new(date, "us-east-1", "service", &encoded);
        assert_eq!(
            actual.to_string(),
            "AWS4-HMAC-SHA256\n\
             20150830T123600Z\n\
             20150830/us-east-1/service/aws4_request\n\
             816cd5b414d056048ba4f7c5386d6e0533120fb1fcfa93762cf0fc39e2cf19e0"
        );
    }

    #[test]
    fn test_double_url_encode() {
        let req = http::Request::builder()
            .uri("https://lookoutvision.us-east-1.amazonaws.com/2020-11-20/tags/arn%3Aaws%3Aproject")
            .body("")
            .unwrap();
        let req = SignableRequest::from(&req);
        let date = parse_date_time("20210511T154045Z").unwrap();
        let creq = CanonicalRequest::from(&req, &SigningSettings::default(), date, None).unwrap();
        assert_eq!(creq.path, "/2020-11-20/tags/arn%253Aaws%253Aproject");

        let settings = SigningSettings {
            uri_encoding: UriEncoding::Single,
            ..Default::default()
        };
        let creq = CanonicalRequest::from(&req, &settings, date, None).unwrap();
        assert_eq!(creq.path, "/2020-11-20/tags/arn%3Aaws%3Aproject");
    }

    #[test]
    fn test_tilde_in_uri() {
        let req = http::Request::builder()
            .uri("https://s3.us-east-1.amazonaws.com/my-bucket?list-type=2&prefix=~objprefix&single&k=&unreserved=-_.~").body("").unwrap();
        let req = SignableRequest::from(&req);
        let date = parse_date_time("20210511T154045Z").unwrap();
        let creq = CanonicalRequest::from(&req, &SigningSettings::default(), date, None).unwrap();
        assert_eq!(
            Some("k=&list-type=2&prefix=~objprefix&single=&unreserved=-_.~"),
            creq.params.as_deref(),
        );
    }

    #[test]
    fn header_values_are_trimmed_and_user_agent_is_not_signed() {
        let req = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .header("my-header", "  a   b  ")
            .header("user-agent", "aws-sdk-rust")
            .body("")
            .unwrap();
        let req = SignableRequest::from(&req);
        let date = parse_date_time("20150830T123600Z").unwrap();
        let creq = CanonicalRequest::from(&req, &SigningSettings::default(), date, Some("token"))
            .unwrap();
        assert_eq!(
            creq.signed_headers.to_string(),
            "host;my-header;x-amz-date;x-amz-security-token"
        );
        assert!(creq.to_string().contains("\nmy-header:a b\n"));
    }

    #[test]
    fn requests_without_authority_cannot_be_signed() {
        let req = http::Request::builder().uri("/relative").body("").unwrap();
        let req = SignableRequest::from(&req);
        let date = parse_date_time("20150830T123600Z").unwrap();
        assert!(CanonicalRequest::from(&req, &SigningSettings::default(), date, None).is_err());
    }
}
