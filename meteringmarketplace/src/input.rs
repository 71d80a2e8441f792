/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs and their awsJson1.1 serialization.

use crate::config::Config;
use aws_http::AwsErrorRetryPolicy;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::{BuildError, Operation};

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

fn check_required(
    operation: &'static str,
    field: &'static str,
    is_set: bool,
) -> Result<(), BuildError> {
    if is_set {
        return Ok(());
    }
    tracing::error!(operation, "Required field: {}, is not set", field);
    Err(BuildError::MissingField {
        field,
        details: "the field is required by the operation",
    })
}

/// Every awsJson1.1 operation is a `POST /` naming its target in the `X-Amz-Target` header
fn json_request<T: Serialize>(
    input: &T,
    target: &'static str,
) -> Result<http::Request<SdkBody>, BuildError> {
    let body = serde_json::to_vec(input).map_err(|err| BuildError::SerializationError(err.into()))?;
    Ok(http::Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header("X-Amz-Target", target)
        .body(SdkBody::from(body))?)
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BatchMeterUsageInput {
    #[serde(rename = "UsageRecords", default, skip_serializing_if = "Option::is_none")]
    pub usage_records: Option<Vec<crate::model::UsageRecord>>,
    #[serde(rename = "ProductCode", default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
}
/// See [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
pub mod batch_meter_usage_input {
    /// A builder for [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        usage_records: Option<Vec<crate::model::UsageRecord>>,
        product_code: Option<String>,
    }
    impl Builder {
        pub fn usage_records(mut self, inp: Vec<crate::model::UsageRecord>) -> Self {
            self.usage_records = Some(inp);
            self
        }
        pub fn set_usage_records(mut self, inp: Option<Vec<crate::model::UsageRecord>>) -> Self {
            self.usage_records = inp;
            self
        }
        pub fn product_code(mut self, inp: impl Into<String>) -> Self {
            self.product_code = Some(inp.into());
            self
        }
        pub fn set_product_code(mut self, inp: Option<String>) -> Self {
            self.product_code = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
        pub fn build(self) -> crate::input::BatchMeterUsageInput {
            crate::input::BatchMeterUsageInput {
                usage_records: self.usage_records,
                product_code: self.product_code,
            }
        }
    }
}
impl BatchMeterUsageInput {
    /// Creates a new builder-style object to manufacture [`BatchMeterUsageInput`](crate::input::BatchMeterUsageInput)
    pub fn builder() -> crate::input::batch_meter_usage_input::Builder {
        crate::input::batch_meter_usage_input::Builder::default()
    }
}
impl BatchMeterUsageInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::BatchMeterUsage, AwsErrorRetryPolicy>, BuildError> {
        check_required("BatchMeterUsage", "UsageRecords", self.usage_records.is_some())?;
        check_required("BatchMeterUsage", "ProductCode", self.product_code.is_some())?;
        let request = json_request(self, "AWSMPMeteringService.BatchMeterUsage")?;
        Ok(config.operation(request, crate::operation::BatchMeterUsage::new(), "BatchMeterUsage"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MeterUsageInput {
    #[serde(rename = "ProductCode", default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(
        rename = "Timestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub timestamp: Option<smithy_types::Instant>,
    #[serde(rename = "UsageDimension", default, skip_serializing_if = "Option::is_none")]
    pub usage_dimension: Option<String>,
    #[serde(rename = "UsageQuantity", default, skip_serializing_if = "Option::is_none")]
    pub usage_quantity: Option<i32>,
    #[serde(rename = "DryRun", default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "UsageAllocations", default, skip_serializing_if = "Option::is_none")]
    pub usage_allocations: Option<Vec<crate::model::UsageAllocation>>,
}
/// See [`MeterUsageInput`](crate::input::MeterUsageInput)
pub mod meter_usage_input {
    /// A builder for [`MeterUsageInput`](crate::input::MeterUsageInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        product_code: Option<String>,
        timestamp: Option<smithy_types::Instant>,
        usage_dimension: Option<String>,
        usage_quantity: Option<i32>,
        dry_run: Option<bool>,
        usage_allocations: Option<Vec<crate::model::UsageAllocation>>,
    }
    impl Builder {
        pub fn product_code(mut self, inp: impl Into<String>) -> Self {
            self.product_code = Some(inp.into());
            self
        }
        pub fn set_product_code(mut self, inp: Option<String>) -> Self {
            self.product_code = inp;
            self
        }
        pub fn timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.timestamp = Some(inp);
            self
        }
        pub fn set_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.timestamp = inp;
            self
        }
        pub fn usage_dimension(mut self, inp: impl Into<String>) -> Self {
            self.usage_dimension = Some(inp.into());
            self
        }
        pub fn set_usage_dimension(mut self, inp: Option<String>) -> Self {
            self.usage_dimension = inp;
            self
        }
        pub fn usage_quantity(mut self, inp: i32) -> Self {
            self.usage_quantity = Some(inp);
            self
        }
        pub fn set_usage_quantity(mut self, inp: Option<i32>) -> Self {
            self.usage_quantity = inp;
            self
        }
        pub fn dry_run(mut self, inp: bool) -> Self {
            self.dry_run = Some(inp);
            self
        }
        pub fn set_dry_run(mut self, inp: Option<bool>) -> Self {
            self.dry_run = inp;
            self
        }
        pub fn usage_allocations(mut self, inp: Vec<crate::model::UsageAllocation>) -> Self {
            self.usage_allocations = Some(inp);
            self
        }
        pub fn set_usage_allocations(
            mut self,
            inp: Option<Vec<crate::model::UsageAllocation>>,
        ) -> Self {
            self.usage_allocations = inp;
            self
        }
        /// Consumes the builder and constructs a [`MeterUsageInput`](crate::input::MeterUsageInput)
        pub fn build(self) -> crate::input::MeterUsageInput {
            crate::input::MeterUsageInput {
                product_code: self.product_code,
                timestamp: self.timestamp,
                usage_dimension: self.usage_dimension,
                usage_quantity: self.usage_quantity,
                dry_run: self.dry_run,
                usage_allocations: self.usage_allocations,
            }
        }
    }
}
impl MeterUsageInput {
    /// Creates a new builder-style object to manufacture [`MeterUsageInput`](crate::input::MeterUsageInput)
    pub fn builder() -> crate::input::meter_usage_input::Builder {
        crate::input::meter_usage_input::Builder::default()
    }
}
impl MeterUsageInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::MeterUsage, AwsErrorRetryPolicy>, BuildError> {
        check_required("MeterUsage", "ProductCode", self.product_code.is_some())?;
        check_required("MeterUsage", "Timestamp", self.timestamp.is_some())?;
        check_required("MeterUsage", "UsageDimension", self.usage_dimension.is_some())?;
        let request = json_request(self, "AWSMPMeteringService.MeterUsage")?;
        Ok(config.operation(request, crate::operation::MeterUsage::new(), "MeterUsage"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterUsageInput {
    #[serde(rename = "ProductCode", default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(rename = "PublicKeyVersion", default, skip_serializing_if = "Option::is_none")]
    pub public_key_version: Option<i32>,
    #[serde(rename = "Nonce", default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}
/// See [`RegisterUsageInput`](crate::input::RegisterUsageInput)
pub mod register_usage_input {
    /// A builder for [`RegisterUsageInput`](crate::input::RegisterUsageInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        product_code: Option<String>,
        public_key_version: Option<i32>,
        nonce: Option<String>,
    }
    impl Builder {
        pub fn product_code(mut self, inp: impl Into<String>) -> Self {
            self.product_code = Some(inp.into());
            self
        }
        pub fn set_product_code(mut self, inp: Option<String>) -> Self {
            self.product_code = inp;
            self
        }
        pub fn public_key_version(mut self, inp: i32) -> Self {
            self.public_key_version = Some(inp);
            self
        }
        pub fn set_public_key_version(mut self, inp: Option<i32>) -> Self {
            self.public_key_version = inp;
            self
        }
        pub fn nonce(mut self, inp: impl Into<String>) -> Self {
            self.nonce = Some(inp.into());
            self
        }
        pub fn set_nonce(mut self, inp: Option<String>) -> Self {
            self.nonce = inp;
            self
        }
        /// Consumes the builder and constructs a [`RegisterUsageInput`](crate::input::RegisterUsageInput)
        pub fn build(self) -> crate::input::RegisterUsageInput {
            crate::input::RegisterUsageInput {
                product_code: self.product_code,
                public_key_version: self.public_key_version,
                nonce: self.nonce,
            }
        }
    }
}
impl RegisterUsageInput {
    /// Creates a new builder-style object to manufacture [`RegisterUsageInput`](crate::input::RegisterUsageInput)
    pub fn builder() -> crate::input::register_usage_input::Builder {
        crate::input::register_usage_input::Builder::default()
    }
}
impl RegisterUsageInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::RegisterUsage, AwsErrorRetryPolicy>, BuildError> {
        check_required("RegisterUsage", "ProductCode", self.product_code.is_some())?;
        check_required("RegisterUsage", "PublicKeyVersion", self.public_key_version.is_some())?;
        let request = json_request(self, "AWSMPMeteringService.RegisterUsage")?;
        Ok(config.operation(request, crate::operation::RegisterUsage::new(), "RegisterUsage"))
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResolveCustomerInput {
    #[serde(rename = "RegistrationToken", default, skip_serializing_if = "Option::is_none")]
    pub registration_token: Option<String>,
}
/// See [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
pub mod resolve_customer_input {
    /// A builder for [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        registration_token: Option<String>,
    }
    impl Builder {
        pub fn registration_token(mut self, inp: impl Into<String>) -> Self {
            self.registration_token = Some(inp.into());
            self
        }
        pub fn set_registration_token(mut self, inp: Option<String>) -> Self {
            self.registration_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
        pub fn build(self) -> crate::input::ResolveCustomerInput {
            crate::input::ResolveCustomerInput {
                registration_token: self.registration_token,
            }
        }
    }
}
impl ResolveCustomerInput {
    /// Creates a new builder-style object to manufacture [`ResolveCustomerInput`](crate::input::ResolveCustomerInput)
    pub fn builder() -> crate::input::resolve_customer_input::Builder {
        crate::input::resolve_customer_input::Builder::default()
    }
}
impl ResolveCustomerInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ResolveCustomer, AwsErrorRetryPolicy>, BuildError> {
        check_required("ResolveCustomer", "RegistrationToken", self.registration_token.is_some())?;
        let request = json_request(self, "AWSMPMeteringService.ResolveCustomer")?;
        Ok(config.operation(request, crate::operation::ResolveCustomer::new(), "ResolveCustomer"))
    }
}
