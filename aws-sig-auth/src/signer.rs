/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::middleware::Signature;
use aws_auth::Credentials;
use aws_sigv4::http_request::{
    sign, PayloadChecksumKind, SignableBody, SignableRequest, SigningParams, SigningSettings,
    UriEncoding,
};
use aws_types::region::SigningRegion;
use aws_types::SigningService;
use http::Uri;
use once_cell::sync::Lazy;
use regex::Regex;
use smithy_http::body::SdkBody;
use std::borrow::Cow;
use std::fmt;
use std::time::SystemTime;

pub type SigningError = aws_sigv4::http_request::SigningError;

static TWO_OR_MORE_LEADING_FORWARD_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(/|%2F){2,}").expect("valid regex"));

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum HttpSignatureType {
    /// A signature for a full http request should be computed, with header updates applied to the signing result.
    HttpRequestHeaders,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signature_type: HttpSignatureType,
    pub signing_options: SigningOptions,
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// The signing configuration used by every operation: SigV4 header signing with a
    /// double-encoded canonical URI. Signing is required.
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signature_type: HttpSignatureType::HttpRequestHeaders,
            signing_options: SigningOptions {
                double_uri_encode: true,
                content_sha256_header: false,
            },
            signing_requirements: SigningRequirements::Required,
        }
    }

    pub fn with_signing_requirements(mut self, requirements: SigningRequirements) -> Self {
        self.signing_requirements = requirements;
        self
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum SigningRequirements {
    /// A signature MAY be added if credentials are defined
    Optional,

    /// A signature MUST be added.
    ///
    /// If no credentials are provided, this will return an error without dispatching the operation.
    Required,

    /// A signature MUST NOT be added.
    Disabled,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        let mut settings = SigningSettings::default();
        settings.uri_encoding = if operation_config.signing_options.double_uri_encode {
            UriEncoding::Double
        } else {
            UriEncoding::Single
        };
        settings.payload_checksum_kind = if operation_config.signing_options.content_sha256_header {
            PayloadChecksumKind::XAmzSha256
        } else {
            PayloadChecksumKind::NoHeader
        };
        settings
    }

    fn signing_params<'a>(
        settings: SigningSettings,
        credentials: &'a Credentials,
        request_config: &'a RequestConfig<'a>,
    ) -> SigningParams<'a> {
        SigningParams {
            access_key: credentials.access_key_id(),
            secret_key: credentials.secret_access_key(),
            security_token: credentials.session_token(),
            region: request_config.region.as_ref(),
            service_name: request_config.service.as_ref(),
            date_time: request_config.request_ts,
            settings,
        }
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// Although this function may be used, end users will not typically
    /// interact with this code. It is generally used via middleware in the request pipeline. See [`SigV4SigningStage`](crate::middleware::SigV4SigningStage).
    pub fn sign(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<SdkBody>,
    ) -> Result<Signature, SigningError> {
        let settings = Self::settings(operation_config);
        let signing_params = Self::signing_params(settings, credentials, request_config);

        // Multiple leading forward slashes in the URI path are deduped for any service; the
        // canonical request is computed from the deduped path.
        if let Cow::Owned(forward_slashes_deduped) =
            dedupe_leading_forward_slashes(request.uri().path())
        {
            let path_and_query = match request.uri().query() {
                Some(query) => format!("{}?{}", forward_slashes_deduped, query),
                None => forward_slashes_deduped,
            };
            let mut parts = request.uri().clone().into_parts();
            if let Ok(path_and_query) = path_and_query.parse() {
                parts.path_and_query = Some(path_and_query);
                if let Ok(uri) = Uri::from_parts(parts) {
                    *request.uri_mut() = uri;
                }
            }
        }

        let (headers, signature) = {
            // A body that is already in memory can be signed directly. A streaming body
            // is signed via UNSIGNED-PAYLOAD.
            let signable_body = request
                .body()
                .bytes()
                .map(SignableBody::Bytes)
                .unwrap_or(SignableBody::UnsignedPayload);
            let signable_request = SignableRequest::new(
                request.method(),
                request.uri(),
                request.headers(),
                signable_body,
            );
            sign(signable_request, &signing_params)?
        }
        .into_parts();

        for (name, value) in headers.iter() {
            request.headers_mut().insert(name.clone(), value.clone());
        }

        Ok(Signature::new(signature))
    }
}

fn dedupe_leading_forward_slashes(uri_path: &str) -> Cow<'_, str> {
    TWO_OR_MORE_LEADING_FORWARD_SLASHES.replace(uri_path, "/")
}

#[cfg(test)]
mod tests {
    use super::{
        dedupe_leading_forward_slashes, OperationSigningConfig, RequestConfig, SigV4Signer,
    };
    use aws_auth::Credentials;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;
    use smithy_http::body::SdkBody;
    use std::borrow::Cow;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn sign_adds_authorization_and_date() {
        let creds = Credentials::from_keys(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
        );
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("service");
        let request_config = RequestConfig {
            // 20150830T123600Z
            request_ts: UNIX_EPOCH + Duration::from_secs(1440938160),
            region: &region,
            service: &service,
        };
        let mut req = http::Request::builder()
            .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
            .body(SdkBody::empty())
            .unwrap();
        let signature = SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut req,
            )
            .expect("signing succeeds");
        assert_eq!(
            signature.as_ref(),
            "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
        );
        assert_eq!(req.headers().get("x-amz-date").unwrap(), "20150830T123600Z");
        assert!(req.headers().get("authorization").is_some());
    }

    #[test]
    fn session_token_is_added_to_signed_request() {
        let creds = Credentials::from_keys("AKID", "secret", Some("token".to_string()));
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("lookoutvision");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH,
            region: &region,
            service: &service,
        };
        let mut req = http::Request::builder()
            .uri("https://lookoutvision.us-east-1.amazonaws.com/")
            .body(SdkBody::from("payload"))
            .unwrap();
        SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut req,
            )
            .expect("signing succeeds");
        assert_eq!(req.headers().get("x-amz-security-token").unwrap(), "token");
    }

    #[test]
    fn leading_slashes_are_deduped_before_signing() {
        let creds = Credentials::from_keys("AKID", "secret", None);
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("lookoutvision");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH,
            region: &region,
            service: &service,
        };
        let mut req = http::Request::builder()
            .uri("https://lookoutvision.us-east-1.amazonaws.com//2020-11-20/projects?maxResults=1")
            .body(SdkBody::empty())
            .unwrap();
        SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut req,
            )
            .expect("signing succeeds");
        assert_eq!(
            req.uri().to_string(),
            "https://lookoutvision.us-east-1.amazonaws.com/2020-11-20/projects?maxResults=1"
        );
    }

    #[test]
    fn dedupe_leading_forward_slashes_should_work_when_input_contains_leading_forward_slashes() {
        assert_eq!(
            dedupe_leading_forward_slashes("//foo/bar"),
            Cow::<'_, str>::Owned("/foo/bar".to_owned())
        );
        assert_eq!(
            dedupe_leading_forward_slashes("///foo/bar"),
            Cow::<'_, str>::Owned("/foo/bar".to_owned())
        );
        assert_eq!(
            dedupe_leading_forward_slashes("/%2Ffoo/bar"),
            Cow::<'_, str>::Owned("/foo/bar".to_owned())
        );
    }

    #[test]
    fn dedupe_leading_forward_slashes_should_not_modify_input_when_multiple_slashes_appear_in_the_middle_of_input(
    ) {
        assert_eq!(
            dedupe_leading_forward_slashes("/foo//bar"),
            Cow::<'_, str>::Borrowed("/foo//bar")
        );
        assert_eq!(
            dedupe_leading_forward_slashes("/foo/bar"),
            Cow::<'_, str>::Borrowed("/foo/bar")
        );
    }
}
