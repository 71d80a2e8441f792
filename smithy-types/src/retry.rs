/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry vocabulary shared by errors and retry policies.
//!
//! Errors describe themselves with [`ProvideErrorKind`]; a policy turns that description into a
//! [`RetryKind`].

use std::time::Duration;

/// Why a failed call may be attempted again.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// The call failed for a reason unrelated to the request itself: a dropped connection, a
    /// timeout, a 5xx status with no modeled error. The request may have reached the service.
    TransientError,

    /// The service asked the caller to slow down.
    ThrottlingError,

    /// The service reported an internal failure and modeled it as safe to retry.
    ServerError,

    /// A client-side condition that a retry can resolve. Does not consume retry quota.
    ClientError,
}

/// Implemented by every error a service client can return.
pub trait ProvideErrorKind {
    /// The kind of a modeled retryable error.
    ///
    /// `None` for errors that are not modeled as retryable. A policy may still retry them based on
    /// the code or the HTTP status.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// The error code sent by the service, if any.
    fn code(&self) -> Option<&str>;
}

/// Decision of a retry policy for one attempt.
#[derive(Eq, PartialEq, Debug)]
pub enum RetryKind {
    /// Retry with backoff for the given kind.
    Error(ErrorKind),

    /// The service named a delay (`x-amz-retry-after`). The strategy may still decline, for
    /// example when the retry quota is spent or the delay exceeds the configured maximum backoff.
    Explicit(Duration),

    /// Do not retry.
    NotRetryable,
}
