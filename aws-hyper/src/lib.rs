/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod conn;
mod retry;
pub mod test_connection;

pub use retry::RetryConfig;

use crate::retry::RetryHandlerFactory;
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_http::body::SdkBody;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::response::ParseHttpResponse;
pub use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::MapRequestLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use smithy_tracing::{NoOpTraceProbe, TraceEvent, TraceEventKind, TraceProbe};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{debug_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The internal connector must implement the following trait bound to be used to dispatch requests:
/// ```rust,ignore
///    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
///        + Send
///        + Clone
///        + 'static,
///    S::Error: Into<BoxError> + Send + Sync + 'static,
///    S::Future: Send + 'static,
/// ```
///
/// Each call runs the operation through the following middleware, outermost first:
/// retry, response parsing, endpoint resolution, user agent, SigV4 signing and finally dispatch
/// over the connector.
pub struct Client<S> {
    inner: S,
    retry_handler: RetryHandlerFactory,
    trace_probe: Arc<dyn TraceProbe>,
}

impl<S: Debug> Debug for Client<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("inner", &self.inner)
            .field("trace_probe", &self.trace_probe)
            .finish()
    }
}

impl<S> Client<S> {
    /// Construct a new `Client` with a custom connector
    pub fn new(connector: S) -> Self {
        Client {
            inner: connector,
            retry_handler: RetryHandlerFactory::new(RetryConfig::default()),
            trace_probe: Arc::new(NoOpTraceProbe),
        }
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_handler.with_config(retry_config);
        self
    }

    /// Attach a trace probe that receives `Start`, `End` and `Error` events for every call
    pub fn with_trace_probe(mut self, trace_probe: Arc<dyn TraceProbe>) -> Self {
        self.trace_probe = trace_probe;
        self
    }

    pub fn trace_probe(&self) -> &Arc<dyn TraceProbe> {
        &self.trace_probe
    }

    fn dispatch_event(
        &self,
        kind: TraceEventKind,
        metadata: Option<&Metadata>,
        detail: Option<(&'static str, String)>,
    ) {
        let name = metadata.map(|m| m.name().to_string()).unwrap_or_default();
        let mut event = TraceEvent::new(name, kind);
        if let Some(metadata) = metadata {
            event = event.with_operation(metadata.service(), metadata.name());
        }
        if let Some((key, value)) = detail {
            event = event.with_attribute(key, value);
        }
        self.trace_probe.dispatch_events(&[event]);
    }
}

#[cfg(feature = "native-tls")]
impl Client<conn::Standard> {
    /// Construct an `https` based client
    pub fn https() -> Self {
        Client::new(conn::Standard::https())
    }
}

fn error_kind<E>(err: &SdkError<E>) -> &'static str {
    match err {
        SdkError::ConstructionFailure(_) => "ConstructionFailure",
        SdkError::DispatchFailure(_) => "DispatchFailure",
        SdkError::ResponseError { .. } => "ResponseError",
        SdkError::ServiceError { .. } => "ServiceError",
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        T: Send + 'static,
        E: Send + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + Sync + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or implementing
    /// unsupported features.
    pub async fn call_raw<O, T, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        T: Send + 'static,
        E: Send + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + Sync + 'static,
    {
        let metadata = input.metadata().cloned();
        let span = match &metadata {
            Some(metadata) => debug_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => debug_span!("send_operation"),
        };
        self.dispatch_event(TraceEventKind::Start, metadata.as_ref(), None);

        let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        let inner = self.inner.clone();
        let mut svc = ServiceBuilder::new()
            .retry(self.retry_handler.new_handler())
            .layer(ParseResponseLayer::<O, Retry>::new())
            .layer(endpoint_resolver)
            .layer(user_agent)
            .layer(signer)
            .layer(DispatchLayer::new())
            .service(inner);
        let result = async {
            match svc.ready().await {
                Ok(svc) => svc.call(input).await,
                Err(err) => Err(err),
            }
        }
        .instrument(span)
        .await;

        match &result {
            Ok(success) => self.dispatch_event(
                TraceEventKind::End,
                metadata.as_ref(),
                Some(("status", success.raw.status().as_u16().to_string())),
            ),
            Err(err) => self.dispatch_event(
                TraceEventKind::Error,
                metadata.as_ref(),
                Some(("error_kind", error_kind(err).to_string())),
            ),
        }
        result
    }
}
