/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Provides functions for calculating Sigv4 signing keys, signatures, and
//! utilities for signing HTTP requests.

pub mod http_request;
pub mod sign;

mod date_fmt;

/// Container for the signed output and the signature.
#[derive(Debug)]
pub struct SigningOutput<T> {
    output: T,
    signature: String,
}

impl<T> SigningOutput<T> {
    pub fn new(output: T, signature: String) -> Self {
        Self { output, signature }
    }

    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_parts(self) -> (T, String) {
        (self.output, self.signature)
    }
}
