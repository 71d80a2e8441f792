/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Marketplace Metering Service
//!
//! Sellers report product usage through this API. SaaS products submit hourly usage with
//! `BatchMeterUsage`, AMI and container products use `MeterUsage`, paid container products call
//! `RegisterUsage` at startup and `ResolveCustomer` exchanges a registration token for a
//! customer identifier.

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
mod serde_util;

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use client::Client;
pub use config::Config;
pub use error::{MeteringError, MeteringErrorKind};
pub use smithy_http::endpoint::Endpoint;

static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("marketplacemetering", env!("CARGO_PKG_VERSION"));

/// Service name used in the SigV4 credential scope
const SIGNING_SERVICE: &str = "aws-marketplace";
const SERVICE_NAME: &str = "meteringmarketplace";
