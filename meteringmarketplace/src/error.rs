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

/// An error returned by AWS Marketplace Metering
///
/// `kind` is the modeled exception, or `Unhandled` when the error code is not modeled or the
/// response could not be parsed. `meta` always holds the code, message and request id parsed
/// from the response.
#[derive(Debug)]
pub struct MeteringError {
    pub kind: MeteringErrorKind,
    pub(crate) meta: smithy_types::Error,
}

#[non_exhaustive]
#[derive(Debug)]
pub enum MeteringErrorKind {
    CustomerNotEntitledException(CustomerNotEntitledException),
    DisabledApiException(DisabledApiException),
    DuplicateRequestException(DuplicateRequestException),
    ExpiredTokenException(ExpiredTokenException),
    InternalServiceErrorException(InternalServiceErrorException),
    InvalidCustomerIdentifierException(InvalidCustomerIdentifierException),
    InvalidEndpointRegionException(InvalidEndpointRegionException),
    InvalidProductCodeException(InvalidProductCodeException),
    InvalidPublicKeyVersionException(InvalidPublicKeyVersionException),
    InvalidRegionException(InvalidRegionException),
    InvalidTagException(InvalidTagException),
    InvalidTokenException(InvalidTokenException),
    InvalidUsageAllocationsException(InvalidUsageAllocationsException),
    InvalidUsageDimensionException(InvalidUsageDimensionException),
    PlatformNotSupportedException(PlatformNotSupportedException),
    ThrottlingException(ThrottlingException),
    TimestampOutOfBoundsException(TimestampOutOfBoundsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(BoxError),
}

impl fmt::Display for MeteringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MeteringErrorKind::CustomerNotEntitledException(inner) => inner.fmt(f),
            MeteringErrorKind::DisabledApiException(inner) => inner.fmt(f),
            MeteringErrorKind::DuplicateRequestException(inner) => inner.fmt(f),
            MeteringErrorKind::ExpiredTokenException(inner) => inner.fmt(f),
            MeteringErrorKind::InternalServiceErrorException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidCustomerIdentifierException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidEndpointRegionException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidProductCodeException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidPublicKeyVersionException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidRegionException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidTagException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidTokenException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidUsageAllocationsException(inner) => inner.fmt(f),
            MeteringErrorKind::InvalidUsageDimensionException(inner) => inner.fmt(f),
            MeteringErrorKind::PlatformNotSupportedException(inner) => inner.fmt(f),
            MeteringErrorKind::ThrottlingException(inner) => inner.fmt(f),
            MeteringErrorKind::TimestampOutOfBoundsException(inner) => inner.fmt(f),
            MeteringErrorKind::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl ProvideErrorKind for MeteringError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            MeteringErrorKind::InternalServiceErrorException(_) => Some(ErrorKind::ServerError),
            MeteringErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        MeteringError::code(self)
    }
}

impl MeteringError {
    pub fn new(kind: MeteringErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Self {
            kind: MeteringErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: MeteringErrorKind::Unhandled(err.into()),
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

    pub fn is_customer_not_entitled_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::CustomerNotEntitledException(_))
    }

    pub fn is_disabled_api_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::DisabledApiException(_))
    }

    pub fn is_duplicate_request_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::DuplicateRequestException(_))
    }

    pub fn is_expired_token_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::ExpiredTokenException(_))
    }

    pub fn is_internal_service_error_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InternalServiceErrorException(_))
    }

    pub fn is_invalid_customer_identifier_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidCustomerIdentifierException(_))
    }

    pub fn is_invalid_endpoint_region_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidEndpointRegionException(_))
    }

    pub fn is_invalid_product_code_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidProductCodeException(_))
    }

    pub fn is_invalid_public_key_version_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidPublicKeyVersionException(_))
    }

    pub fn is_invalid_region_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidRegionException(_))
    }

    pub fn is_invalid_tag_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidTagException(_))
    }

    pub fn is_invalid_token_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidTokenException(_))
    }

    pub fn is_invalid_usage_allocations_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidUsageAllocationsException(_))
    }

    pub fn is_invalid_usage_dimension_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::InvalidUsageDimensionException(_))
    }

    pub fn is_platform_not_supported_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::PlatformNotSupportedException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::ThrottlingException(_))
    }

    pub fn is_timestamp_out_of_bounds_exception(&self) -> bool {
        matches!(&self.kind, MeteringErrorKind::TimestampOutOfBoundsException(_))
    }
}

impl Error for MeteringError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            MeteringErrorKind::CustomerNotEntitledException(inner) => Some(inner),
            MeteringErrorKind::DisabledApiException(inner) => Some(inner),
            MeteringErrorKind::DuplicateRequestException(inner) => Some(inner),
            MeteringErrorKind::ExpiredTokenException(inner) => Some(inner),
            MeteringErrorKind::InternalServiceErrorException(inner) => Some(inner),
            MeteringErrorKind::InvalidCustomerIdentifierException(inner) => Some(inner),
            MeteringErrorKind::InvalidEndpointRegionException(inner) => Some(inner),
            MeteringErrorKind::InvalidProductCodeException(inner) => Some(inner),
            MeteringErrorKind::InvalidPublicKeyVersionException(inner) => Some(inner),
            MeteringErrorKind::InvalidRegionException(inner) => Some(inner),
            MeteringErrorKind::InvalidTagException(inner) => Some(inner),
            MeteringErrorKind::InvalidTokenException(inner) => Some(inner),
            MeteringErrorKind::InvalidUsageAllocationsException(inner) => Some(inner),
            MeteringErrorKind::InvalidUsageDimensionException(inner) => Some(inner),
            MeteringErrorKind::PlatformNotSupportedException(inner) => Some(inner),
            MeteringErrorKind::ThrottlingException(inner) => Some(inner),
            MeteringErrorKind::TimestampOutOfBoundsException(inner) => Some(inner),
            MeteringErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

fn modeled<T: DeserializeOwned>(
    body: &[u8],
    wrap: fn(T) -> MeteringErrorKind,
) -> MeteringErrorKind {
    match serde_json::from_slice(body) {
        Ok(parsed) => wrap(parsed),
        Err(err) => MeteringErrorKind::Unhandled(err.into()),
    }
}

/// Map an error response onto a modeled exception
pub(crate) fn parse_error(response: &http::Response<Bytes>) -> MeteringError {
    let generic = aws_http::json_errors::parse_generic_error(response);
    let body: &[u8] = if response.body().is_empty() {
        b"{}"
    } else {
        response.body()
    };
    let kind = match generic.code() {
        Some("CustomerNotEntitledException") => {
            modeled(body, MeteringErrorKind::CustomerNotEntitledException)
        }
        Some("DisabledApiException") => modeled(body, MeteringErrorKind::DisabledApiException),
        Some("DuplicateRequestException") => {
            modeled(body, MeteringErrorKind::DuplicateRequestException)
        }
        Some("ExpiredTokenException") => modeled(body, MeteringErrorKind::ExpiredTokenException),
        Some("InternalServiceErrorException") => {
            modeled(body, MeteringErrorKind::InternalServiceErrorException)
        }
        Some("InvalidCustomerIdentifierException") => {
            modeled(body, MeteringErrorKind::InvalidCustomerIdentifierException)
        }
        Some("InvalidEndpointRegionException") => {
            modeled(body, MeteringErrorKind::InvalidEndpointRegionException)
        }
        Some("InvalidProductCodeException") => {
            modeled(body, MeteringErrorKind::InvalidProductCodeException)
        }
        Some("InvalidPublicKeyVersionException") => {
            modeled(body, MeteringErrorKind::InvalidPublicKeyVersionException)
        }
        Some("InvalidRegionException") => modeled(body, MeteringErrorKind::InvalidRegionException),
        Some("InvalidTagException") => modeled(body, MeteringErrorKind::InvalidTagException),
        Some("InvalidTokenException") => modeled(body, MeteringErrorKind::InvalidTokenException),
        Some("InvalidUsageAllocationsException") => {
            modeled(body, MeteringErrorKind::InvalidUsageAllocationsException)
        }
        Some("InvalidUsageDimensionException") => {
            modeled(body, MeteringErrorKind::InvalidUsageDimensionException)
        }
        Some("PlatformNotSupportedException") => {
            modeled(body, MeteringErrorKind::PlatformNotSupportedException)
        }
        Some("ThrottlingException") => modeled(body, MeteringErrorKind::ThrottlingException),
        Some("TimestampOutOfBoundsException") => {
            modeled(body, MeteringErrorKind::TimestampOutOfBoundsException)
        }
        _ => return MeteringError::generic(generic),
    };
    MeteringError::new(kind, generic)
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CustomerNotEntitledException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl CustomerNotEntitledException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for CustomerNotEntitledException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomerNotEntitledException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for CustomerNotEntitledException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DisabledApiException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl DisabledApiException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for DisabledApiException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisabledApiException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for DisabledApiException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DuplicateRequestException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl DuplicateRequestException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for DuplicateRequestException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DuplicateRequestException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for DuplicateRequestException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ExpiredTokenException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl ExpiredTokenException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for ExpiredTokenException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExpiredTokenException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for ExpiredTokenException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InternalServiceErrorException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InternalServiceErrorException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InternalServiceErrorException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternalServiceErrorException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InternalServiceErrorException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidCustomerIdentifierException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidCustomerIdentifierException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidCustomerIdentifierException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidCustomerIdentifierException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidCustomerIdentifierException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidEndpointRegionException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidEndpointRegionException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidEndpointRegionException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidEndpointRegionException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidEndpointRegionException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidProductCodeException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidProductCodeException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidProductCodeException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidProductCodeException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidProductCodeException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidPublicKeyVersionException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidPublicKeyVersionException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidPublicKeyVersionException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidPublicKeyVersionException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidPublicKeyVersionException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidRegionException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidRegionException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidRegionException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidRegionException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidRegionException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidTagException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidTagException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidTagException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidTagException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidTagException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidTokenException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidTokenException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidTokenException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidTokenException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidTokenException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidUsageAllocationsException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidUsageAllocationsException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidUsageAllocationsException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidUsageAllocationsException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidUsageAllocationsException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvalidUsageDimensionException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl InvalidUsageDimensionException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for InvalidUsageDimensionException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidUsageDimensionException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for InvalidUsageDimensionException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PlatformNotSupportedException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl PlatformNotSupportedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for PlatformNotSupportedException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlatformNotSupportedException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for PlatformNotSupportedException {}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ThrottlingException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
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
pub struct TimestampOutOfBoundsException {
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
impl TimestampOutOfBoundsException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl fmt::Display for TimestampOutOfBoundsException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimestampOutOfBoundsException")?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
impl Error for TimestampOutOfBoundsException {}
