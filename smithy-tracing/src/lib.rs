/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Trace probes observe the lifecycle of SDK operations.
//!
//! A [`TraceProbe`] receives batches of [`TraceEvent`]s from a client. The SDK ships a
//! [`NoOpTraceProbe`] and, behind the `opentelemetry` feature, an adapter that owns an
//! OpenTelemetry push metrics exporter.

use std::borrow::Cow;
use std::fmt::Debug;
use std::time::SystemTime;

#[cfg(feature = "opentelemetry")]
pub mod otel;

#[cfg(feature = "opentelemetry")]
pub use otel::OpenTelemetryTraceProbe;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceEventKind {
    Start,
    End,
    Error,
    Info,
}

/// A single observation about an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceEvent {
    pub name: Cow<'static, str>,
    pub kind: TraceEventKind,
    pub operation: Option<String>,
    pub service: Option<String>,
    pub timestamp: SystemTime,
    pub attributes: Vec<(Cow<'static, str>, String)>,
}

impl TraceEvent {
    pub fn new(name: impl Into<Cow<'static, str>>, kind: TraceEventKind) -> Self {
        TraceEvent {
            name: name.into(),
            kind,
            operation: None,
            service: None,
            timestamp: SystemTime::now(),
            attributes: Vec::new(),
        }
    }

    pub fn with_operation(mut self, service: impl Into<String>, operation: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self.operation = Some(operation.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Receives trace events emitted by SDK clients.
///
/// Implementations must be cheap to call: `dispatch_events` runs inline on the request path.
pub trait TraceProbe: Send + Sync + Debug {
    fn dispatch_events(&self, events: &[TraceEvent]);
}

/// A probe that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTraceProbe;

impl TraceProbe for NoOpTraceProbe {
    fn dispatch_events(&self, _events: &[TraceEvent]) {}
}

#[cfg(test)]
mod test {
    use crate::{NoOpTraceProbe, TraceEvent, TraceEventKind, TraceProbe};
    use std::sync::Arc;

    #[test]
    fn events_carry_operation_metadata() {
        let event = TraceEvent::new("DescribeProject", TraceEventKind::Start)
            .with_operation("lookoutvision", "DescribeProject")
            .with_attribute("attempt", "1");
        assert_eq!(event.service.as_deref(), Some("lookoutvision"));
        assert_eq!(event.attribute("attempt"), Some("1"));
        assert_eq!(event.attribute("missing"), None);
    }

    #[test]
    fn noop_probe_is_object_safe() {
        let probe: Arc<dyn TraceProbe> = Arc::new(NoOpTraceProbe);
        probe.dispatch_events(&[TraceEvent::new("x", TraceEventKind::Info)]);
        probe.dispatch_events(&[]);
    }
}
