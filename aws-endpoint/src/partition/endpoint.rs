/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;

/// Endpoint metadata
///
/// A template based endpoint definition; this is what each service uses as its default
/// endpoint resolver.
#[derive(Debug)]
pub struct Metadata {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,

    /// Credential scope to set for requests to this endpoint
    pub credential_scope: CredentialScope,

    /// Signature versions supported by this endpoint.
    ///
    /// Currently unused since the SDK only supports SigV4
    pub signature_versions: SignatureVersion,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SignatureVersion {
    V4,
}

impl ResolveAwsEndpoint for Metadata {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::mutable(uri.parse()?);
        let credential_scope = self.credential_scope.merge(
            &CredentialScope::builder()
                .region(region.clone())
                .build(),
        );
        Ok(AwsEndpoint::new(endpoint, credential_scope))
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Metadata, Protocol, SignatureVersion};
    use crate::ResolveAwsEndpoint;
    use aws_types::region::{Region, SigningRegion};

    #[test]
    fn template_is_filled_with_region() {
        let metadata = Metadata {
            uri_template: "metering.marketplace.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: Default::default(),
            signature_versions: SignatureVersion::V4,
        };
        let endpoint = metadata
            .resolve_endpoint(&Region::new("eu-west-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri().to_string(),
            "https://metering.marketplace.eu-west-1.amazonaws.com/"
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("eu-west-1"))
        );
        assert_eq!(endpoint.credential_scope().service(), None);
    }

    #[test]
    fn invalid_template_is_an_error() {
        let metadata = Metadata {
            uri_template: "bad host {region}",
            protocol: Protocol::Https,
            credential_scope: Default::default(),
            signature_versions: SignatureVersion::V4,
        };
        assert!(metadata.resolve_endpoint(&Region::new("us-east-1")).is_err());
    }
}
