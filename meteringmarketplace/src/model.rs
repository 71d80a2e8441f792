/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data types shared by AWS Marketplace Metering operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smithy_types::{Instant, UnknownVariantValue};

/// A metadata tag attached to an allocation of usage.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Tag {
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }
    impl Builder {
        pub fn key(mut self, inp: impl Into<String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: Option<String>) -> Self {
            self.key = inp;
            self
        }
        pub fn value(mut self, inp: impl Into<String>) -> Self {
            self.value = Some(inp.into());
            self
        }
        pub fn set_value(mut self, inp: Option<String>) -> Self {
            self.value = inp;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

/// A share of usage quantity attributed to a set of tags.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UsageAllocation {
    #[serde(rename = "AllocatedUsageQuantity", default, skip_serializing_if = "Option::is_none")]
    pub allocated_usage_quantity: Option<i32>,
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}
/// See [`UsageAllocation`](crate::model::UsageAllocation)
pub mod usage_allocation {
    /// A builder for [`UsageAllocation`](crate::model::UsageAllocation)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        allocated_usage_quantity: Option<i32>,
        tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn allocated_usage_quantity(mut self, inp: i32) -> Self {
            self.allocated_usage_quantity = Some(inp);
            self
        }
        pub fn set_allocated_usage_quantity(mut self, inp: Option<i32>) -> Self {
            self.allocated_usage_quantity = inp;
            self
        }
        pub fn tags(mut self, inp: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(inp);
            self
        }
        pub fn set_tags(mut self, inp: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`UsageAllocation`](crate::model::UsageAllocation)
        pub fn build(self) -> crate::model::UsageAllocation {
            crate::model::UsageAllocation {
                allocated_usage_quantity: self.allocated_usage_quantity,
                tags: self.tags,
            }
        }
    }
}
impl UsageAllocation {
    /// Creates a new builder-style object to manufacture [`UsageAllocation`](crate::model::UsageAllocation)
    pub fn builder() -> crate::model::usage_allocation::Builder {
        crate::model::usage_allocation::Builder::default()
    }
}

/// A single usage record sent with `BatchMeterUsage`.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UsageRecord {
    #[serde(
        rename = "Timestamp",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::serde_util::instant_epoch_seconds",
    )]
    pub timestamp: Option<Instant>,
    #[serde(rename = "CustomerIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub customer_identifier: Option<String>,
    #[serde(rename = "Dimension", default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(rename = "UsageAllocations", default, skip_serializing_if = "Option::is_none")]
    pub usage_allocations: Option<Vec<UsageAllocation>>,
}
/// See [`UsageRecord`](crate::model::UsageRecord)
pub mod usage_record {
    /// A builder for [`UsageRecord`](crate::model::UsageRecord)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        timestamp: Option<smithy_types::Instant>,
        customer_identifier: Option<String>,
        dimension: Option<String>,
        quantity: Option<i32>,
        usage_allocations: Option<Vec<crate::model::UsageAllocation>>,
    }
    impl Builder {
        pub fn timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.timestamp = Some(inp);
            self
        }
        pub fn set_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.timestamp = inp;
            self
        }
        pub fn customer_identifier(mut self, inp: impl Into<String>) -> Self {
            self.customer_identifier = Some(inp.into());
            self
        }
        pub fn set_customer_identifier(mut self, inp: Option<String>) -> Self {
            self.customer_identifier = inp;
            self
        }
        pub fn dimension(mut self, inp: impl Into<String>) -> Self {
            self.dimension = Some(inp.into());
            self
        }
        pub fn set_dimension(mut self, inp: Option<String>) -> Self {
            self.dimension = inp;
            self
        }
        pub fn quantity(mut self, inp: i32) -> Self {
            self.quantity = Some(inp);
            self
        }
        pub fn set_quantity(mut self, inp: Option<i32>) -> Self {
            self.quantity = inp;
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
        /// Consumes the builder and constructs a [`UsageRecord`](crate::model::UsageRecord)
        pub fn build(self) -> crate::model::UsageRecord {
            crate::model::UsageRecord {
                timestamp: self.timestamp,
                customer_identifier: self.customer_identifier,
                dimension: self.dimension,
                quantity: self.quantity,
                usage_allocations: self.usage_allocations,
            }
        }
    }
}
impl UsageRecord {
    /// Creates a new builder-style object to manufacture [`UsageRecord`](crate::model::UsageRecord)
    pub fn builder() -> crate::model::usage_record::Builder {
        crate::model::usage_record::Builder::default()
    }
}

/// The result of metering one usage record.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UsageRecordResult {
    #[serde(rename = "UsageRecord", default, skip_serializing_if = "Option::is_none")]
    pub usage_record: Option<UsageRecord>,
    #[serde(rename = "MeteringRecordId", default, skip_serializing_if = "Option::is_none")]
    pub metering_record_id: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UsageRecordResultStatus>,
}
/// See [`UsageRecordResult`](crate::model::UsageRecordResult)
pub mod usage_record_result {
    /// A builder for [`UsageRecordResult`](crate::model::UsageRecordResult)
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Builder {
        usage_record: Option<crate::model::UsageRecord>,
        metering_record_id: Option<String>,
        status: Option<crate::model::UsageRecordResultStatus>,
    }
    impl Builder {
        pub fn usage_record(mut self, inp: crate::model::UsageRecord) -> Self {
            self.usage_record = Some(inp);
            self
        }
        pub fn set_usage_record(mut self, inp: Option<crate::model::UsageRecord>) -> Self {
            self.usage_record = inp;
            self
        }
        pub fn metering_record_id(mut self, inp: impl Into<String>) -> Self {
            self.metering_record_id = Some(inp.into());
            self
        }
        pub fn set_metering_record_id(mut self, inp: Option<String>) -> Self {
            self.metering_record_id = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::UsageRecordResultStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: Option<crate::model::UsageRecordResultStatus>) -> Self {
            self.status = inp;
            self
        }
        /// Consumes the builder and constructs a [`UsageRecordResult`](crate::model::UsageRecordResult)
        pub fn build(self) -> crate::model::UsageRecordResult {
            crate::model::UsageRecordResult {
                usage_record: self.usage_record,
                metering_record_id: self.metering_record_id,
                status: self.status,
            }
        }
    }
}
impl UsageRecordResult {
    /// Creates a new builder-style object to manufacture [`UsageRecordResult`](crate::model::UsageRecordResult)
    pub fn builder() -> crate::model::usage_record_result::Builder {
        crate::model::usage_record_result::Builder::default()
    }
}

/// Outcome of metering a single usage record.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UsageRecordResultStatus {
    Success,
    CustomerNotSubscribed,
    DuplicateRecord,
    /// A value this client does not model, kept verbatim in the overflow registry
    Unknown(UnknownVariantValue),
}
impl UsageRecordResultStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UsageRecordResultStatus::Success => "Success",
            UsageRecordResultStatus::CustomerNotSubscribed => "CustomerNotSubscribed",
            UsageRecordResultStatus::DuplicateRecord => "DuplicateRecord",
            UsageRecordResultStatus::Unknown(value) => value.as_str(),
        }
    }
    /// The names of every modeled variant
    pub fn values() -> &'static [&'static str] {
        &["Success", "CustomerNotSubscribed", "DuplicateRecord"]
    }
}
impl<'a> From<&'a str> for UsageRecordResultStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "Success" => UsageRecordResultStatus::Success,
            "CustomerNotSubscribed" => UsageRecordResultStatus::CustomerNotSubscribed,
            "DuplicateRecord" => UsageRecordResultStatus::DuplicateRecord,
            other => UsageRecordResultStatus::Unknown(UnknownVariantValue::new(other)),
        }
    }
}
impl std::str::FromStr for UsageRecordResultStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UsageRecordResultStatus::from(s))
    }
}
impl AsRef<str> for UsageRecordResultStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for UsageRecordResultStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for UsageRecordResultStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(UsageRecordResultStatus::from(value.as_str()))
    }
}
