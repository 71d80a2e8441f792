/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to sign HTTP requests.

mod canonical_request;
mod error;
mod settings;
mod sign;
mod url_escape;

pub use error::SigningError;
pub use settings::{PayloadChecksumKind, SigningParams, SigningSettings, UriEncoding};
pub use sign::{sign, SignableBody, SignableRequest};
