/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An error occurred while building the request for an operation. The request was never sent.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A field required by the operation was not set
    #[error("Missing required field [{field}]. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// A field was set but had an invalid value
    #[error("Invalid field in input: {field} (Details: {details})")]
    InvalidField { field: &'static str, details: String },

    /// The serializer could not serialize the input
    #[error("Failed to serialize request: {0}")]
    SerializationError(#[source] BoxError),

    /// The built URI or header was not valid
    #[error("Invalid URI or header: {0}")]
    InvalidRequest(#[from] http::Error),
}

impl BuildError {
    /// Stable error code for this failure, used by retry classification and callers.
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::MissingField { .. } => "MISSING_PARAMETER",
            BuildError::InvalidField { .. } => "INVALID_PARAMETER_VALUE",
            BuildError::SerializationError(_) => "SERIALIZATION",
            BuildError::InvalidRequest(_) => "INVALID_QUERY_PARAMETER",
        }
    }

    /// Build errors are never retryable: retrying cannot produce a different request.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl ProvideErrorKind for BuildError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Some(BuildError::code(self))
    }
}

#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn from_parts(request: Request, parts: Parts<H, R>) -> Self {
        Self { request, parts }
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties_mut()
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn with_retry_policy<R2>(self, retry_policy: R2) -> Operation<H, R2> {
        Operation {
            request: self.request,
            parts: Parts {
                response_handler: self.parts.response_handler,
                retry_policy,
                metadata: self.parts.metadata,
            },
        }
    }

    pub fn retry_policy(&self) -> &R {
        &self.parts.retry_policy
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn try_clone(&self) -> Option<Self>
    where
        H: Clone,
        R: Clone,
    {
        let request = self.request.try_clone()?;
        Some(Self {
            request,
            parts: self.parts.clone(),
        })
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

/// Operation request type that associates a property bag with an underlying HTTP request.
#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see [`Request::augment`]). Retries share the bag with
    /// the original request.
    properties: Arc<Mutex<PropertyBag>>,
}

fn lock(properties: &Mutex<PropertyBag>) -> MutexGuard<'_, PropertyBag> {
    properties
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: Arc::new(Mutex::new(PropertyBag::new())),
        }
    }

    pub fn from_parts(inner: http::Request<SdkBody>, properties: Arc<Mutex<PropertyBag>>) -> Self {
        Request { inner, properties }
    }

    /// Transform the HTTP request held by this operation request, with access to the property bag.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let properties: &mut PropertyBag = &mut lock(&self.properties);
            f(self.inner, properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    /// Clone the request. Returns `None` when the body is streaming.
    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::new(cloned_body);
        *cloned_request.method_mut() = self.inner.method().clone();
        *cloned_request.uri_mut() = self.inner.uri().clone();
        *cloned_request.version_mut() = self.inner.version();
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Arc<Mutex<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;
    use smithy_types::retry::ProvideErrorKind;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.lock().unwrap().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn streaming_requests_cannot_be_cloned() {
        let request = Request::new(http::Request::new(SdkBody::from(hyper::Body::from("x"))));
        assert!(request.try_clone().is_none());
    }

    #[test]
    fn missing_field_error() {
        let err = BuildError::MissingField {
            field: "ProjectName",
            details: "ProjectName is required",
        };
        assert_eq!(
            err.to_string(),
            "Missing required field [ProjectName]. ProjectName is required"
        );
        assert_eq!(ProvideErrorKind::code(&err), Some("MISSING_PARAMETER"));
        assert!(!err.is_retryable());
    }
}
