/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One response handler per Marketplace Metering operation.

use crate::error::MeteringError;
use crate::output;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use smithy_http::response::ParseStrictResponse;

fn parse_response<T: DeserializeOwned>(
    response: &http::Response<Bytes>,
) -> Result<T, MeteringError> {
    if !response.status().is_success() {
        return Err(crate::error::parse_error(response));
    }
    // operations without output members may answer with an empty body
    let body: &[u8] = if response.body().is_empty() {
        b"{}"
    } else {
        response.body()
    };
    serde_json::from_slice(body).map_err(MeteringError::unhandled)
}

/// Submits metering records for a Marketplace SaaS product.
///
/// Response handler for the `BatchMeterUsage` operation.
#[derive(Clone, Debug, Default)]
pub struct BatchMeterUsage {
    _private: (),
}
impl BatchMeterUsage {
    /// Creates a new builder-style object to manufacture [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
    pub fn builder() -> crate::input::batch_meter_usage_input::Builder {
        crate::input::batch_meter_usage_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for BatchMeterUsage {
    type Output = Result<output::BatchMeterUsageOutput, MeteringError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Emits a metering record for a product running on EC2 or containers.
///
/// Response handler for the `MeterUsage` operation.
#[derive(Clone, Debug, Default)]
pub struct MeterUsage {
    _private: (),
}
impl MeterUsage {
    /// Creates a new builder-style object to manufacture [`MeterUsageInput`](crate::input::MeterUsageInput)
    pub fn builder() -> crate::input::meter_usage_input::Builder {
        crate::input::meter_usage_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for MeterUsage {
    type Output = Result<output::MeterUsageOutput, MeteringError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Registers a paid container product for hourly metering.
///
/// Response handler for the `RegisterUsage` operation.
#[derive(Clone, Debug, Default)]
pub struct RegisterUsage {
    _private: (),
}
impl RegisterUsage {
    /// Creates a new builder-style object to manufacture [`RegisterUsageInput`](crate::input::RegisterUsageInput)
    pub fn builder() -> crate::input::register_usage_input::Builder {
        crate::input::register_usage_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for RegisterUsage {
    type Output = Result<output::RegisterUsageOutput, MeteringError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}

/// Exchanges a registration token for a customer identifier.
///
/// Response handler for the `ResolveCustomer` operation.
#[derive(Clone, Debug, Default)]
pub struct ResolveCustomer {
    _private: (),
}
impl ResolveCustomer {
    /// Creates a new builder-style object to manufacture [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
    pub fn builder() -> crate::input::resolve_customer_input::Builder {
        crate::input::resolve_customer_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ResolveCustomer {
    type Output = Result<output::ResolveCustomerOutput, MeteringError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response)
    }
}
