/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::InvalidHeaderValue;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
enum SigningErrorKind {
    MissingAuthority,
    InvalidHeaderValue { source: InvalidHeaderValue },
}

/// Error signing request
#[derive(Debug)]
pub struct SigningError {
    kind: SigningErrorKind,
}

impl SigningError {
    pub(crate) fn missing_authority() -> Self {
        Self {
            kind: SigningErrorKind::MissingAuthority,
        }
    }
}

impl fmt::Display for SigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SigningErrorKind::*;
        match self.kind {
            MissingAuthority => write!(
                f,
                "request URI has no authority and no host header; the endpoint must be set before signing"
            ),
            InvalidHeaderValue { .. } => {
                write!(f, "failed to create canonical request: invalid header value")
            }
        }
    }
}

impl Error for SigningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use SigningErrorKind::*;
        match &self.kind {
            MissingAuthority => None,
            InvalidHeaderValue { source } => Some(source),
        }
    }
}

impl From<InvalidHeaderValue> for SigningError {
    fn from(source: InvalidHeaderValue) -> Self {
        Self {
            kind: SigningErrorKind::InvalidHeaderValue { source },
        }
    }
}
