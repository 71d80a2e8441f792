/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service configuration
//!
//! Region, credentials and endpoint resolution for Marketplace Metering operations.

use aws_auth::provider::{CredentialsProvider, ProvideCredentials};
use aws_endpoint::partition::endpoint::{Metadata, Protocol, SignatureVersion};
use aws_endpoint::{set_endpoint_resolver, AwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::os_shim_internal::Env;
use aws_types::region::{ProvideRegion, Region};
use aws_types::SigningService;
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, Operation};
use smithy_tracing::TraceProbe;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Config {
    pub(crate) endpoint_resolver: AwsEndpointResolver,
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: CredentialsProvider,
    pub(crate) trace_probe: Option<Arc<dyn TraceProbe>>,
    #[cfg(feature = "client")]
    pub(crate) retry_config: Option<aws_hyper::RetryConfig>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.field("trace_probe", &self.trace_probe);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration resolved from the environment
    ///
    /// The region comes from `AWS_REGION` / `AWS_DEFAULT_REGION`, credentials from
    /// `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN`.
    pub fn from_env() -> Self {
        Builder::default().build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Attach the shared middleware properties to a serialized request
    pub(crate) fn operation<O>(
        &self,
        request: http::Request<SdkBody>,
        handler: O,
        name: &'static str,
    ) -> Operation<O, AwsErrorRetryPolicy> {
        let mut request = operation::Request::new(request);
        {
            let mut properties = request.properties_mut();
            properties.insert(OperationSigningConfig::default_config());
            properties.insert(SigningService::from_static(crate::SIGNING_SERVICE));
            properties.insert(AwsUserAgent::new_from_environment(
                Env::real(),
                crate::API_METADATA.clone(),
            ));
            if let Some(region) = &self.region {
                properties.insert(region.clone());
            }
            set_endpoint_resolver(&mut properties, self.endpoint_resolver.clone());
            aws_auth::set_provider(&mut properties, self.credentials_provider.clone());
        }
        tracing::debug!(operation = name, region = ?self.region, "built operation");
        Operation::new(request, handler)
            .with_metadata(operation::Metadata::new(name, crate::SERVICE_NAME))
            .with_retry_policy(AwsErrorRetryPolicy::new())
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint_resolver: Option<AwsEndpointResolver>,
    region: Option<Region>,
    region_set: bool,
    credentials_provider: Option<CredentialsProvider>,
    trace_probe: Option<Arc<dyn TraceProbe>>,
    #[cfg(feature = "client")]
    retry_config: Option<aws_hyper::RetryConfig>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the endpoint, eg. with a fixed [`Endpoint`](crate::Endpoint)
    pub fn endpoint_resolver(
        mut self,
        endpoint_resolver: impl ResolveAwsEndpoint + 'static,
    ) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    /// Set the region. Providers that yield no region leave the config without one; operations
    /// then fail at the endpoint stage with `MISSING_REGION`.
    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self.region_set = true;
        self
    }

    pub fn credentials_provider(
        mut self,
        credentials_provider: impl ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(credentials_provider));
        self
    }

    pub fn trace_probe(mut self, trace_probe: Arc<dyn TraceProbe>) -> Self {
        self.trace_probe = Some(trace_probe);
        self
    }

    #[cfg(feature = "client")]
    pub fn retry_config(mut self, retry_config: aws_hyper::RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    pub fn build(self) -> Config {
        let region = if self.region_set {
            self.region
        } else {
            aws_types::region::default_provider().region()
        };
        Config {
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(Metadata {
                    uri_template: "metering.marketplace.{region}.amazonaws.com",
                    protocol: Protocol::Https,
                    credential_scope: Default::default(),
                    signature_versions: SignatureVersion::V4,
                })
            }),
            region,
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| Arc::new(aws_auth::provider::default_provider())),
            trace_probe: self.trace_probe,
            #[cfg(feature = "client")]
            retry_config: self.retry_config,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Config, Region};
    use tracing_test::traced_test;

    #[test]
    fn explicit_region_wins() {
        let conf = Config::builder().region(Region::new("us-west-2")).build();
        assert_eq!(conf.region(), Some(&Region::new("us-west-2")));
    }

    #[test]
    #[traced_test]
    fn missing_fields_are_logged() {
        let conf = Config::builder().region(Region::new("us-east-1")).build();
        let result = crate::input::ResolveCustomerInput::builder()
            .build()
            .make_operation(&conf);
        assert!(result.is_err());
        assert!(logs_contain("Required field: RegistrationToken, is not set"));
    }
}
