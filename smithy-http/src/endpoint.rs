/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, InvalidUri, Uri};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// API Endpoint
///
/// This implements an API endpoint as specified in the
/// [Smithy Endpoint Specification](https://awslabs.github.io/smithy/1.0/spec/core/endpoint-traits.html)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, endpointPrefix is ignored when setting the endpoint on a request
    immutable: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndpointPrefix(String);

impl EndpointPrefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self, InvalidEndpoint> {
        let prefix = prefix.into();
        match Authority::from_str(&prefix) {
            Ok(_) => Ok(EndpointPrefix(prefix)),
            Err(err) => Err(InvalidEndpoint::InvalidUri(err)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub enum InvalidEndpoint {
    EndpointMustHaveScheme,
    EndpointMustHaveAuthority,
    InvalidUri(InvalidUri),
    InvalidParts(http::Error),
}

impl fmt::Display for InvalidEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidEndpoint::EndpointMustHaveScheme => write!(f, "endpoint must contain a scheme"),
            InvalidEndpoint::EndpointMustHaveAuthority => {
                write!(f, "endpoint must contain a valid authority")
            }
            InvalidEndpoint::InvalidUri(err) => write!(f, "invalid endpoint uri: {}", err),
            InvalidEndpoint::InvalidParts(err) => write!(f, "invalid endpoint: {}", err),
        }
    }
}

impl Error for InvalidEndpoint {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InvalidEndpoint::InvalidUri(err) => Some(err),
            InvalidEndpoint::InvalidParts(err) => Some(err),
            _ => None,
        }
    }
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// Certain protocols will attempt to prefix additional information onto an endpoint. If you
    /// wish to ignore these prefixes (for example, when communicating with localhost), set `immutable` to `true`.
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Sets the endpoint on `uri`, potentially applying the specified `prefix` in the process.
    ///
    /// The scheme and authority come from the endpoint; the path of the endpoint (if any) is
    /// joined with the path and query already present on `uri`.
    pub fn set_endpoint(
        &self,
        uri: &mut http::Uri,
        prefix: Option<&EndpointPrefix>,
    ) -> Result<(), InvalidEndpoint> {
        let prefix = prefix.map(|p| p.0.as_str()).unwrap_or("");
        let authority = self
            .uri
            .authority()
            .map(|auth| auth.as_str())
            .ok_or(InvalidEndpoint::EndpointMustHaveAuthority)?;
        let authority = if !self.immutable && !prefix.is_empty() {
            Authority::from_str(&format!("{}{}", prefix, authority))
        } else {
            Authority::from_str(authority)
        }
        .map_err(InvalidEndpoint::InvalidUri)?;
        let scheme = self
            .uri
            .scheme()
            .cloned()
            .ok_or(InvalidEndpoint::EndpointMustHaveScheme)?;
        let path_and_query = Self::merge_paths(&self.uri, uri);
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(path_and_query.as_ref())
            .build()
            .map_err(InvalidEndpoint::InvalidParts)?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}
