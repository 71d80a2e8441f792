/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::retry::classify_service_error;
use smithy_types::retry::{ProvideErrorKind, RetryKind};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful SDK Result
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<SdkBody>,
    pub parsed: O,
}

/// Failed SDK Result
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<SdkBody>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        raw: http::Response<SdkBody>,
        err: E,
    },
}

impl<E> SdkError<E>
where
    E: ProvideErrorKind,
{
    /// Whether an external retry strategy may retry the call that produced this error.
    ///
    /// Construction failures are never retryable. Dispatch failures always are. Service errors
    /// follow [`classify_service_error`], the same classification the retry policy applies.
    pub fn is_retryable(&self) -> bool {
        match self {
            SdkError::ConstructionFailure(_) => false,
            SdkError::DispatchFailure(_) => true,
            SdkError::ResponseError { .. } => false,
            SdkError::ServiceError { err, raw } => {
                classify_service_error(err, raw) != RetryKind::NotRetryable
            }
        }
    }
}

impl<E> SdkError<E> {
    /// The HTTP response associated with this error, if one was received.
    pub fn raw_response(&self) -> Option<&http::Response<SdkBody>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// The modeled service error, if this is a `ServiceError`.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response error: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "{}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::BuildError;
    use crate::result::SdkError;
    use std::error::Error;

    #[test]
    fn construction_failures_are_not_retryable() {
        let err: SdkError<BuildError> = SdkError::ConstructionFailure(Box::new(
            BuildError::MissingField {
                field: "JobName",
                details: "JobName is required",
            },
        ));
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("Missing required field [JobName]"));
        assert!(err.source().is_some());
    }

    #[test]
    fn dispatch_failures_are_retryable() {
        let err: SdkError<BuildError> = SdkError::DispatchFailure("connection reset".into());
        assert!(err.is_retryable());
        assert!(err.raw_response().is_none());
    }

    #[test]
    fn service_error_exposes_raw_response() {
        let err = SdkError::ServiceError {
            raw: http::Response::builder()
                .status(400)
                .body(SdkBody::from("{}"))
                .unwrap(),
            err: BuildError::InvalidField {
                field: "MaxResults",
                details: "out of range".to_string(),
            },
        };
        assert_eq!(err.raw_response().map(|r| r.status().as_u16()), Some(400));
        assert!(err.service_error().is_some());
    }
}
