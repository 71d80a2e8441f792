/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Bridge from the SDK trace probe interface to an OpenTelemetry push metrics exporter.

use crate::{TraceEvent, TraceProbe};
use opentelemetry_sdk::metrics::exporter::PushMetricsExporter;
use std::fmt;

/// A [`TraceProbe`] that owns an OpenTelemetry [`PushMetricsExporter`].
///
/// Events are accepted but not exported; the exporter is held so that its lifecycle is tied to
/// the probe and can be shut down through it.
pub struct OpenTelemetryTraceProbe<E> {
    metric_exporter: E,
}

impl<E> OpenTelemetryTraceProbe<E>
where
    E: PushMetricsExporter,
{
    pub fn new(metric_exporter: E) -> Self {
        OpenTelemetryTraceProbe { metric_exporter }
    }

    /// Factory used by client configuration.
    pub fn build_probe(metric_exporter: E) -> Box<Self> {
        Box::new(Self::new(metric_exporter))
    }

    pub fn exporter(&self) -> &E {
        &self.metric_exporter
    }

    /// Shut down the underlying exporter.
    pub fn shutdown(&self) -> opentelemetry::metrics::Result<()> {
        self.metric_exporter.shutdown()
    }
}

impl<E> fmt::Debug for OpenTelemetryTraceProbe<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTelemetryTraceProbe").finish()
    }
}

impl<E> TraceProbe for OpenTelemetryTraceProbe<E>
where
    E: PushMetricsExporter,
{
    fn dispatch_events(&self, events: &[TraceEvent]) {
        tracing::trace!(count = events.len(), "trace events received");
    }
}
