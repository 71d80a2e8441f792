/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.

use serde::Deserialize;

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct BatchMeterUsageOutput {
    #[serde(rename = "Results", default)]
    pub results: Option<Vec<crate::model::UsageRecordResult>>,
    #[serde(rename = "UnprocessedRecords", default)]
    pub unprocessed_records: Option<Vec<crate::model::UsageRecord>>,
}
/// See [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
pub mod batch_meter_usage_output {
    /// A builder for [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        results: Option<Vec<crate::model::UsageRecordResult>>,
        unprocessed_records: Option<Vec<crate::model::UsageRecord>>,
    }
    impl Builder {
        pub fn results(mut self, inp: Vec<crate::model::UsageRecordResult>) -> Self {
            self.results = Some(inp);
            self
        }
        pub fn set_results(mut self, inp: Option<Vec<crate::model::UsageRecordResult>>) -> Self {
            self.results = inp;
            self
        }
        pub fn unprocessed_records(mut self, inp: Vec<crate::model::UsageRecord>) -> Self {
            self.unprocessed_records = Some(inp);
            self
        }
        pub fn set_unprocessed_records(
            mut self,
            inp: Option<Vec<crate::model::UsageRecord>>,
        ) -> Self {
            self.unprocessed_records = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
        pub fn build(self) -> crate::output::BatchMeterUsageOutput {
            crate::output::BatchMeterUsageOutput {
                results: self.results,
                unprocessed_records: self.unprocessed_records,
            }
        }
    }
}
impl BatchMeterUsageOutput {
    /// Creates a new builder-style object to manufacture [`BatchMeterUsageOutput`](crate::output::BatchMeterUsageOutput)
    pub fn builder() -> crate::output::batch_meter_usage_output::Builder {
        crate::output::batch_meter_usage_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MeterUsageOutput {
    #[serde(rename = "MeteringRecordId", default)]
    pub metering_record_id: Option<String>,
}
/// See [`MeterUsageOutput`](crate::output::MeterUsageOutput)
pub mod meter_usage_output {
    /// A builder for [`MeterUsageOutput`](crate::output::MeterUsageOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        metering_record_id: Option<String>,
    }
    impl Builder {
        pub fn metering_record_id(mut self, inp: impl Into<String>) -> Self {
            self.metering_record_id = Some(inp.into());
            self
        }
        pub fn set_metering_record_id(mut self, inp: Option<String>) -> Self {
            self.metering_record_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`MeterUsageOutput`](crate::output::MeterUsageOutput)
        pub fn build(self) -> crate::output::MeterUsageOutput {
            crate::output::MeterUsageOutput {
                metering_record_id: self.metering_record_id,
            }
        }
    }
}
impl MeterUsageOutput {
    /// Creates a new builder-style object to manufacture [`MeterUsageOutput`](crate::output::MeterUsageOutput)
    pub fn builder() -> crate::output::meter_usage_output::Builder {
        crate::output::meter_usage_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RegisterUsageOutput {
    #[serde(
        rename = "PublicKeyRotationTimestamp",
        default,
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub public_key_rotation_timestamp: Option<smithy_types::Instant>,
    #[serde(rename = "Signature", default)]
    pub signature: Option<String>,
}
/// See [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
pub mod register_usage_output {
    /// A builder for [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        public_key_rotation_timestamp: Option<smithy_types::Instant>,
        signature: Option<String>,
    }
    impl Builder {
        pub fn public_key_rotation_timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.public_key_rotation_timestamp = Some(inp);
            self
        }
        pub fn set_public_key_rotation_timestamp(
            mut self,
            inp: Option<smithy_types::Instant>,
        ) -> Self {
            self.public_key_rotation_timestamp = inp;
            self
        }
        pub fn signature(mut self, inp: impl Into<String>) -> Self {
            self.signature = Some(inp.into());
            self
        }
        pub fn set_signature(mut self, inp: Option<String>) -> Self {
            self.signature = inp;
            self
        }
        /// Consumes the builder and constructs a [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
        pub fn build(self) -> crate::output::RegisterUsageOutput {
            crate::output::RegisterUsageOutput {
                public_key_rotation_timestamp: self.public_key_rotation_timestamp,
                signature: self.signature,
            }
        }
    }
}
impl RegisterUsageOutput {
    /// Creates a new builder-style object to manufacture [`RegisterUsageOutput`](crate::output::RegisterUsageOutput)
    pub fn builder() -> crate::output::register_usage_output::Builder {
        crate::output::register_usage_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ResolveCustomerOutput {
    #[serde(rename = "CustomerIdentifier", default)]
    pub customer_identifier: Option<String>,
    #[serde(rename = "ProductCode", default)]
    pub product_code: Option<String>,
    #[serde(rename = "CustomerAWSAccountId", default)]
    pub customer_aws_account_id: Option<String>,
}
/// See [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
pub mod resolve_customer_output {
    /// A builder for [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        customer_identifier: Option<String>,
        product_code: Option<String>,
        customer_aws_account_id: Option<String>,
    }
    impl Builder {
        pub fn customer_identifier(mut self, inp: impl Into<String>) -> Self {
            self.customer_identifier = Some(inp.into());
            self
        }
        pub fn set_customer_identifier(mut self, inp: Option<String>) -> Self {
            self.customer_identifier = inp;
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
        pub fn customer_aws_account_id(mut self, inp: impl Into<String>) -> Self {
            self.customer_aws_account_id = Some(inp.into());
            self
        }
        pub fn set_customer_aws_account_id(mut self, inp: Option<String>) -> Self {
            self.customer_aws_account_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
        pub fn build(self) -> crate::output::ResolveCustomerOutput {
            crate::output::ResolveCustomerOutput {
                customer_identifier: self.customer_identifier,
                product_code: self.product_code,
                customer_aws_account_id: self.customer_aws_account_id,
            }
        }
    }
}
impl ResolveCustomerOutput {
    /// Creates a new builder-style object to manufacture [`ResolveCustomerOutput`](crate::output::ResolveCustomerOutput)
    pub fn builder() -> crate::output::resolve_customer_output::Builder {
        crate::output::resolve_customer_output::Builder::default()
    }
}
