/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod json_errors;
pub mod user_agent;

use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::{classify_service_error, ClassifyResponse};
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};

/// A retry policy that models AWS error codes as outlined in the SEP
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
///
/// Dispatch failures are transient; construction failures and unparseable responses are never retried.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AwsErrorRetryPolicy;

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, result: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
        match result {
            Ok(_) => RetryKind::NotRetryable,
            Err(SdkError::ServiceError { err, raw }) => classify_service_error(err, raw),
            Err(SdkError::DispatchFailure(_)) => RetryKind::Error(ErrorKind::TransientError),
            Err(_) => RetryKind::NotRetryable,
        }
    }
}
