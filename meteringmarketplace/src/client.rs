/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Fluent client for AWS Marketplace Metering.

use crate::config::Config;
use aws_hyper::conn::Standard;
use smithy_http::body::SdkBody;
use std::error::Error;
use std::sync::Arc;

type BoxError = Box<dyn Error + Send + Sync>;

pub(crate) struct Handle<C> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

/// Client for AWS Marketplace Metering
///
/// Each operation has a method returning a fluent builder. `send()` validates the input, builds
/// the operation and dispatches it through the [`aws_hyper::Client`] middleware stack.
pub struct Client<C = Standard> {
    handle: Arc<Handle<C>>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            handle: self.handle.clone(),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("client", &self.handle.client)
            .field("conf", &self.handle.conf)
            .finish()
    }
}

impl Client<Standard> {
    /// Client configured from the environment, talking https
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }

    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, Standard::https())
    }
}

impl<C> Client<C> {
    /// Client using a custom connector, eg. a [`TestConnection`](aws_hyper::test_connection::TestConnection)
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let mut client = aws_hyper::Client::new(conn);
        if let Some(retry_config) = &conf.retry_config {
            client = client.with_retry_config(retry_config.clone());
        }
        if let Some(trace_probe) = &conf.trace_probe {
            client = client.with_trace_probe(trace_probe.clone());
        }
        Client {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }
}

impl<C> Client<C>
where
    C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    C::Error: Into<BoxError> + Send + Sync + 'static,
    C::Future: Send + 'static,
{
    pub fn batch_meter_usage(&self) -> fluent_builders::BatchMeterUsage<C> {
        fluent_builders::BatchMeterUsage::new(self.handle.clone())
    }

    pub fn meter_usage(&self) -> fluent_builders::MeterUsage<C> {
        fluent_builders::MeterUsage::new(self.handle.clone())
    }

    pub fn register_usage(&self) -> fluent_builders::RegisterUsage<C> {
        fluent_builders::RegisterUsage::new(self.handle.clone())
    }

    pub fn resolve_customer(&self) -> fluent_builders::ResolveCustomer<C> {
        fluent_builders::ResolveCustomer::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::{BoxError, Handle};
    use crate::error::MeteringError;
    use smithy_http::body::SdkBody;
    use smithy_http::result::SdkError;
    use std::sync::Arc;

    /// Fluent builder for the `BatchMeterUsage` operation
    pub struct BatchMeterUsage<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::batch_meter_usage_input::Builder,
    }

    impl<C> BatchMeterUsage<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::BatchMeterUsageOutput, SdkError<MeteringError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn usage_records(mut self, inp: Vec<crate::model::UsageRecord>) -> Self {
            self.inner = self.inner.usage_records(inp);
            self
        }
        pub fn set_usage_records(mut self, inp: Option<Vec<crate::model::UsageRecord>>) -> Self {
            self.inner = self.inner.set_usage_records(inp);
            self
        }
        pub fn product_code(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.product_code(inp);
            self
        }
        pub fn set_product_code(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_product_code(inp);
            self
        }
    }

    /// Fluent builder for the `MeterUsage` operation
    pub struct MeterUsage<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::meter_usage_input::Builder,
    }

    impl<C> MeterUsage<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(self) -> Result<crate::output::MeterUsageOutput, SdkError<MeteringError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn product_code(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.product_code(inp);
            self
        }
        pub fn set_product_code(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_product_code(inp);
            self
        }
        pub fn timestamp(mut self, inp: smithy_types::Instant) -> Self {
            self.inner = self.inner.timestamp(inp);
            self
        }
        pub fn set_timestamp(mut self, inp: Option<smithy_types::Instant>) -> Self {
            self.inner = self.inner.set_timestamp(inp);
            self
        }
        pub fn usage_dimension(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.usage_dimension(inp);
            self
        }
        pub fn set_usage_dimension(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_usage_dimension(inp);
            self
        }
        pub fn usage_quantity(mut self, inp: i32) -> Self {
            self.inner = self.inner.usage_quantity(inp);
            self
        }
        pub fn set_usage_quantity(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_usage_quantity(inp);
            self
        }
        pub fn dry_run(mut self, inp: bool) -> Self {
            self.inner = self.inner.dry_run(inp);
            self
        }
        pub fn set_dry_run(mut self, inp: Option<bool>) -> Self {
            self.inner = self.inner.set_dry_run(inp);
            self
        }
        pub fn usage_allocations(mut self, inp: Vec<crate::model::UsageAllocation>) -> Self {
            self.inner = self.inner.usage_allocations(inp);
            self
        }
        pub fn set_usage_allocations(
            mut self,
            inp: Option<Vec<crate::model::UsageAllocation>>,
        ) -> Self {
            self.inner = self.inner.set_usage_allocations(inp);
            self
        }
    }

    /// Fluent builder for the `RegisterUsage` operation
    pub struct RegisterUsage<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::register_usage_input::Builder,
    }

    impl<C> RegisterUsage<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::RegisterUsageOutput, SdkError<MeteringError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn product_code(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.product_code(inp);
            self
        }
        pub fn set_product_code(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_product_code(inp);
            self
        }
        pub fn public_key_version(mut self, inp: i32) -> Self {
            self.inner = self.inner.public_key_version(inp);
            self
        }
        pub fn set_public_key_version(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_public_key_version(inp);
            self
        }
        pub fn nonce(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.nonce(inp);
            self
        }
        pub fn set_nonce(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_nonce(inp);
            self
        }
    }

    /// Fluent builder for the `ResolveCustomer` operation
    pub struct ResolveCustomer<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::resolve_customer_input::Builder,
    }

    impl<C> ResolveCustomer<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ResolveCustomerOutput, SdkError<MeteringError>>
        where
            C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                + Send
                + Clone
                + 'static,
            C::Error: Into<BoxError> + Send + Sync + 'static,
            C::Future: Send + 'static,
        {
            let op = self
                .inner
                .build()
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn registration_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.registration_token(inp);
            self
        }
        pub fn set_registration_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_registration_token(inp);
            self
        }
    }
}
