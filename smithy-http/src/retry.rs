/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP specific retry behaviors
//!
//! For protocol agnostic retries, see `smithy_types::retry`.

use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// Decide whether the result of an operation should be retried.
///
/// `T` and `E` are the success and error types of the operation (typically `SdkSuccess<O>` and
/// `SdkError<E>`).
pub trait ClassifyResponse<T, E>: Clone {
    fn classify(&self, response: Result<&T, &E>) -> RetryKind;
}

impl<T, E> ClassifyResponse<T, E> for () {
    fn classify(&self, _: Result<&T, &E>) -> RetryKind {
        RetryKind::NotRetryable
    }
}

const TRANSIENT_ERROR_STATUS_CODES: [u16; 4] = [500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

/// Error kind implied by a well-known error code, regardless of the service that sent it.
pub fn error_kind_for_code(code: &str) -> Option<ErrorKind> {
    if THROTTLING_ERRORS.contains(&code) {
        Some(ErrorKind::ThrottlingError)
    } else if TRANSIENT_ERRORS.contains(&code) {
        Some(ErrorKind::TransientError)
    } else {
        None
    }
}

/// Classify an error response received from a service.
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header
/// 2. The modeled error kind
/// 3. Well-known throttling and transient error codes
/// 4. Transient HTTP status codes (500, 502, 503, 504)
pub fn classify_service_error<E, B>(err: &E, response: &http::Response<B>) -> RetryKind
where
    E: ProvideErrorKind,
{
    if let Some(retry_after_delay) = response
        .headers()
        .get("x-amz-retry-after")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.parse::<u64>().ok())
    {
        return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
    }
    if let Some(kind) = err.retryable_error_kind() {
        return RetryKind::Error(kind);
    }
    if let Some(kind) = err.code().and_then(error_kind_for_code) {
        return RetryKind::Error(kind);
    }
    if TRANSIENT_ERROR_STATUS_CODES.contains(&response.status().as_u16()) {
        return RetryKind::Error(ErrorKind::TransientError);
    }
    RetryKind::NotRetryable
}

#[cfg(test)]
mod test {
    use super::{classify_service_error, error_kind_for_code};
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};

    struct Coded(Option<&'static str>);

    impl ProvideErrorKind for Coded {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            self.0
        }
    }

    fn response(status: u16) -> http::Response<()> {
        http::Response::builder().status(status).body(()).unwrap()
    }

    #[test]
    fn codes() {
        assert_eq!(error_kind_for_code("SlowDown"), Some(ErrorKind::ThrottlingError));
        assert_eq!(
            error_kind_for_code("RequestTimeoutException"),
            Some(ErrorKind::TransientError)
        );
        assert_eq!(error_kind_for_code("ValidationException"), None);
    }

    #[test]
    fn codes_take_priority_over_status() {
        assert_eq!(
            classify_service_error(&Coded(Some("Throttling")), &response(503)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            classify_service_error(&Coded(None), &response(503)),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(
            classify_service_error(&Coded(Some("AccessDenied")), &response(403)),
            RetryKind::NotRetryable
        );
    }
}
