/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service errors and error response parsing.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use smithy_http::retry::error_kind_for_code;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error returned by Amazon Lookout for Vision
///
/// `kind` is the modeled exception, or `Unhandled` when the error code is not modeled or the
/// response could not be parsed. `meta` always holds the code, message and request id parsed
/// from the response.
#[derive(Debug)]
pub struct LookoutVisionError {
    pub kind: LookoutVisionErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[non_exhaustive]
#[derive(Debug)]
pub enum LookoutVisionErrorKind {
    AccessDeniedException(AccessDeniedException),
    ConflictException(ConflictException),
    InternalServerException(InternalServerException),
    ResourceNotFoundException(ResourceNotFoundException),
    ServiceQuotaExceededException(ServiceQuotaExceededException),
    ThrottlingException(ThrottlingException),
    ValidationException(ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(BoxError),
}

impl fmt::Display for LookoutVisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LookoutVisionErrorKind::AccessDeniedException(inner) => inner.fmt(f),
            LookoutVisionErrorKind::ConflictException(inner) => inner.fmt(f),
            LookoutVisionErrorKind::InternalServerException(inner) => inner.fmt(f),
            LookoutVisionErrorKind::ResourceNotFoundException(inner) => inner.fmt(f),
            LookoutVisionErrorKind::ServiceQuotaExceededException(inner) => inner.fmt(f),
            LookoutVisionErrorKind::ThrottlingException(inner) => inner.fmt(f),
            LookoutVisionErrorKind::ValidationException(inner) => inner.fmt(f),
            LookoutVisionErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl ProvideErrorKind for LookoutVisionError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            LookoutVisionErrorKind::InternalServerException(_) => Some(ErrorKind::ServerError),
            LookoutVisionErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        LookoutVisionError::code(self)
    }
}

impl LookoutVisionError {
    pub fn new(kind: LookoutVisionErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Self {
            kind: LookoutVisionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: LookoutVisionErrorKind::Unhandled(err.into()),
        }
    }

    // Consider if this should actually be `Option<Cow<&str>>`. This would enable us to use display
    // as implemented by std::Error to generate a message in that case.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Whether the retry strategy treats this error as retryable, judged from the modeled kind
    /// and the error code. Status-only transient failures are visible on
    /// [`SdkError::is_retryable`](smithy_http::result::SdkError::is_retryable).
    pub fn is_retryable(&self) -> bool {
        self.retryable_error_kind()
            .or_else(|| self.code().and_then(error_kind_for_code))
            .is_some()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, LookoutVisionErrorKind::AccessDeniedException(_))
    }

    pub fn is_conflict_exception(&self) -> bool {
        matches!(&self.kind, LookoutVisionErrorKind::ConflictException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, LookoutVisionErrorKind::InternalServerException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, LookoutVisionErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_quota_exceeded_exception(&self) -> bool {
        matches!(&self.kind, LookoutVisionErrorKind::ServiceQuotaExceededException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, LookoutVisionErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, LookoutVisionErrorKind::ValidationException(_))
    }
}

impl Error for LookoutVisionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            LookoutVisionErrorKind::AccessDeniedException(inner) => Some(inner),
            LookoutVisionErrorKind::ConflictException(inner) => Some(inner),
            LookoutVisionErrorKind::InternalServerException(inner) => Some(inner),
            LookoutVisionErrorKind::ResourceNotFoundException(inner) => Some(inner),
            LookoutVisionErrorKind::ServiceQuotaExceededException(inner) => Some(inner),
            LookoutVisionErrorKind::ThrottlingException(inner) => Some(inner),
            LookoutVisionErrorKind::ValidationException(inner) => Some(inner),
            LookoutVisionErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

fn modeled<T: DeserializeOwned>(
    body: &[u8],
    wrap: fn(T) -> LookoutVisionErrorKind,
) -> LookoutVisionErrorKind {
    match serde_json::from_slice(body) {
        Ok(parsed) => wrap(parsed),
        Err(err) => LookoutVisionErrorKind::Unhandled(err.into()),
    }
}

fn retry_after_seconds(response: &http::Response<Bytes>) -> Option<i32> {
    response
        .headers()
        .get(http::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Map an error response onto a modeled exception
pub(crate) fn parse_error(response: &http::Response<Bytes>) -> LookoutVisionError {
    let generic = aws_http::json_errors::parse_generic_error(response);
    let body: &[u8] = if response.body().is_empty() {
        b"{}"
    } else {
        response.body()
    };
    let mut kind = match generic.code() {
        Some("AccessDeniedException") => {
            modeled(body, LookoutVisionErrorKind::AccessDeniedException)
        }
        Some("ConflictException") => modeled(body, LookoutVisionErrorKind::ConflictException),
        Some("InternalServerException") => {
            modeled(body, LookoutVisionErrorKind::InternalServerException)
        }
        Some("ResourceNotFoundException") => {
            modeled(body, LookoutVisionErrorKind::ResourceNotFoundException)
        }
        Some("ServiceQuotaExceededException") => {
            modeled(body, LookoutVisionErrorKind::ServiceQuotaExceededException)
        }
        Some("ThrottlingException") => modeled(body, LookoutVisionErrorKind::ThrottlingException),
        Some("ValidationException") => modeled(body, LookoutVisionErrorKind::ValidationException),
        _ => return LookoutVisionError::generic(generic),
    };
    match &mut kind {
        LookoutVisionErrorKind::InternalServerException(inner) => {
            inner.retry_after_seconds = retry_after_seconds(response)
        }
        LookoutVisionErrorKind::ThrottlingException(inner) => {
            inner.retry_after_seconds = retry_after_seconds(response)
        }
        _ => {}
    }
    LookoutVisionError::new(kind, generic)
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AccessDeniedException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl AccessDeniedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for AccessDeniedException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessDeniedException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for AccessDeniedException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ConflictException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
    #[serde(rename = "ResourceId", default)]
    pub resource_id: Option<String>,
    #[serde(rename = "ResourceType", default)]
    pub resource_type: Option<crate::model::ResourceType>,
}
impl ConflictException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for ConflictException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConflictException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for ConflictException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InternalServerException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
    /// Read from the `Retry-After` response header
    #[serde(skip)]
    pub retry_after_seconds: Option<i32>,
}
impl InternalServerException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InternalServerException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternalServerException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InternalServerException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ResourceNotFoundException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
    #[serde(rename = "ResourceId", default)]
    pub resource_id: Option<String>,
    #[serde(rename = "ResourceType", default)]
    pub resource_type: Option<crate::model::ResourceType>,
}
impl ResourceNotFoundException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceNotFoundException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for ResourceNotFoundException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ServiceQuotaExceededException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
    #[serde(rename = "ResourceId", default)]
    pub resource_id: Option<String>,
    #[serde(rename = "ResourceType", default)]
    pub resource_type: Option<crate::model::ResourceType>,
    #[serde(rename = "QuotaCode", default)]
    pub quota_code: Option<String>,
    #[serde(rename = "ServiceCode", default)]
    pub service_code: Option<String>,
}
impl ServiceQuotaExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for ServiceQuotaExceededException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceQuotaExceededException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for ServiceQuotaExceededException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ThrottlingException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
    #[serde(rename = "QuotaCode", default)]
    pub quota_code: Option<String>,
    #[serde(rename = "ServiceCode", default)]
    pub service_code: Option<String>,
    /// Read from the `Retry-After` response header
    #[serde(skip)]
    pub retry_after_seconds: Option<i32>,
}
impl ThrottlingException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for ThrottlingException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThrottlingException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for ThrottlingException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ValidationException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl ValidationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for ValidationException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidationException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for ValidationException {}
