/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Lookout for Vision
//!
//! Lookout for Vision finds visual defects in industrial products. This crate exposes every
//! operation of the `2020-11-20` API: projects, datasets and dataset entries, model training
//! and hosting, model packaging jobs, anomaly detection and resource tagging.
//!
//! ```rust,no_run
//! # async fn docs() -> Result<(), Box<dyn std::error::Error>> {
//! use lookoutvision::{Client, Config, Region};
//!
//! let conf = Config::builder().region(Region::new("us-east-1")).build();
//! let client = Client::from_conf(conf);
//! let projects = client.list_projects().send().await?;
//! println!("{:?}", projects.projects);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod idempotency_token;
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
pub use error::{LookoutVisionError, LookoutVisionErrorKind};
pub use smithy_http::endpoint::Endpoint;

static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("lookoutvision", env!("CARGO_PKG_VERSION"));

/// Service name used in the SigV4 credential scope
const SIGNING_SERVICE: &str = "lookoutvision";
const SERVICE_NAME: &str = "lookoutvision";
