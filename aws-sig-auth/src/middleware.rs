/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{
    OperationSigningConfig, RequestConfig, SigV4Signer, SigningError, SigningRequirements,
};
use aws_auth::{CredentialsError, CredentialsProvider};
use aws_types::region::SigningRegion;
use aws_types::SigningService;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Container for the request signature for use in the property bag.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub fn new(signature: String) -> Self {
        Self(signature)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `lookoutvision`
/// - [`CredentialsProvider`](CredentialsProvider): A credentials provider to retrieve credentials
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration, eg.
///   changes to URL encoding behavior, or headers that must be omitted.
/// If any of these fields are missing, the middleware will return an error.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("Signing failed")]
    SigningFailure(#[from] SigningError),
    #[error("Failed to load credentials from the credentials provider")]
    CredentialsLoadingError(#[from] CredentialsError),
}

/// Extract a signing config from a [`PropertyBag`](smithy_http::property_bag::PropertyBag)
fn signing_config(
    config: &PropertyBag,
) -> Result<(&OperationSigningConfig, RequestConfig), SigningStageError> {
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let signing_service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service: signing_service,
    };
    Ok((operation_config, request_config))
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|mut req, config| {
            let operation_config = config
                .get::<OperationSigningConfig>()
                .ok_or(SigningStageError::MissingSigningConfig)?;
            let requirements = operation_config.signing_requirements;
            if requirements == SigningRequirements::Disabled {
                return Ok(req);
            }
            let cred_provider = config
                .get::<CredentialsProvider>()
                .ok_or(SigningStageError::MissingCredentialsProvider)?;
            let creds = match (requirements, cred_provider.provide_credentials()) {
                (_, Ok(creds)) => creds,
                (SigningRequirements::Optional, Err(err)) => {
                    tracing::warn!(err = %err, "failed to load credentials; sending the request unsigned");
                    return Ok(req);
                }
                (_, Err(err)) => return Err(SigningStageError::CredentialsLoadingError(err)),
            };

            let signature = {
                let (operation_config, request_config) = signing_config(config)?;
                self.signer
                    .sign(operation_config, &request_config, &creds, &mut req)?
            };
            config.insert(signature);
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, Signature, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer, SigningRequirements};
    use aws_auth::provider::{set_provider, CredentialsError, ProvideCredentials};
    use aws_auth::Credentials;
    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};
    use tracing_test::traced_test;

    struct NoCredentials;

    impl ProvideCredentials for NoCredentials {
        fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
            Err(CredentialsError::CredentialsNotLoaded)
        }
    }

    fn request(
        requirements: SigningRequirements,
        provider: Arc<dyn ProvideCredentials>,
    ) -> operation::Request {
        let req = http::Request::builder()
            .uri("https://lookoutvision.us-east-1.amazonaws.com/2020-11-20/projects")
            .body(SdkBody::from("{}"))
            .unwrap();
        let mut req = operation::Request::new(req);
        {
            let mut props = req.properties_mut();
            props.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
            props.insert(SigningRegion::from(Region::new("us-east-1")));
            props.insert(SigningService::from_static("lookoutvision"));
            props.insert(
                OperationSigningConfig::default_config().with_signing_requirements(requirements),
            );
            set_provider(&mut props, provider);
        }
        req
    }

    #[test]
    fn signs_request_and_records_signature() {
        let req = request(
            SigningRequirements::Required,
            Arc::new(Credentials::from_keys("AKIAfoo", "bar", None)),
        );
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = signer.apply(req).expect("signing succeeded");
        assert!(req.properties().get::<Signature>().is_some());
        let (req, _) = req.into_parts();
        let auth = req
            .headers()
            .get(AUTHORIZATION)
            .expect("auth header must be present")
            .to_str()
            .unwrap();
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIAfoo/20210120/us-east-1/lookoutvision/aws4_request"
        ));
        assert_eq!(req.headers().get("x-amz-date").unwrap(), "20210120T163347Z");
    }

    #[test]
    fn required_signing_fails_without_credentials() {
        let req = request(SigningRequirements::Required, Arc::new(NoCredentials));
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        match signer.apply(req) {
            Err(SigningStageError::CredentialsLoadingError(_)) => {}
            other => panic!("expected a credentials error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    #[traced_test]
    fn optional_signing_skips_signature_without_credentials() {
        let req = request(SigningRequirements::Optional, Arc::new(NoCredentials));
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = signer.apply(req).expect("request is sent unsigned");
        assert!(req.http().headers().get(AUTHORIZATION).is_none());
        assert!(logs_contain("sending the request unsigned"));
    }

    #[test]
    fn disabled_signing_never_loads_credentials() {
        let req = request(SigningRequirements::Disabled, Arc::new(NoCredentials));
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = signer.apply(req).expect("signing is disabled");
        assert!(req.http().headers().get(AUTHORIZATION).is_none());
        assert!(req.properties().get::<Signature>().is_none());
    }

    #[test]
    fn missing_signing_region_is_an_error() {
        let mut req = request(
            SigningRequirements::Required,
            Arc::new(Credentials::from_keys("AKIAfoo", "bar", None)),
        );
        req.properties_mut().remove::<SigningRegion>();
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        match signer.apply(req) {
            Err(SigningStageError::MissingSigningRegion) => {}
            other => panic!("expected a missing region error, got {:?}", other.map(|_| ())),
        }
    }
}
