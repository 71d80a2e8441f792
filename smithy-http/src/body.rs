/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use http_body::{Body, SizeHint};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests and for holding HTTP responses once they
/// have been received. In-memory bodies can be cloned (and therefore retried and signed); streaming
/// bodies cannot.
pub struct SdkBody(Inner);

enum Inner {
    Once(Option<Bytes>),
    Streaming(hyper::Body),
    Taken,
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Once(Some(bytes)) => f.debug_tuple("Once").field(bytes).finish(),
            Inner::Once(None) => f.write_str("Once(<consumed>)"),
            Inner::Streaming(_) => f.write_str("Streaming"),
            Inner::Taken => f.write_str("Taken"),
        }
    }
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody(Inner::Once(None))
    }

    /// Replace the body with `Taken`, returning the original contents.
    pub fn take(&mut self) -> SdkBody {
        SdkBody(std::mem::replace(&mut self.0, Inner::Taken))
    }

    fn poll_inner(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, BoxError>>> {
        match &mut self.0 {
            Inner::Once(ref mut opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) if bytes.is_empty() => Poll::Ready(None),
                    Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                    None => Poll::Ready(None),
                }
            }
            Inner::Streaming(body) => Pin::new(body)
                .poll_data(cx)
                .map(|chunk| chunk.map(|res| res.map_err(|err| err.into()))),
            Inner::Taken => Poll::Ready(Some(Err("A `Taken` body should never be polled".into()))),
        }
    }

    /// If possible, return a reference to this body as `&[u8]`
    ///
    /// If this SdkBody is NOT streaming, this will return the byte slab
    /// If this SdkBody is streaming, this will return `None`
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Once(Some(b)) => Some(&b[..]),
            Inner::Once(None) => Some(&[]),
            _ => None,
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        match &self.0 {
            Inner::Once(bytes) => Some(SdkBody(Inner::Once(bytes.clone()))),
            _ => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.size_hint().exact()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody(Inner::Once(Some(bytes)))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl From<hyper::Body> for SdkBody {
    fn from(body: hyper::Body) -> Self {
        SdkBody(Inner::Streaming(body))
    }
}

impl Body for SdkBody {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner(cx)
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.0 {
            Inner::Once(None) => true,
            Inner::Once(Some(bytes)) => bytes.is_empty(),
            Inner::Streaming(hyper_body) => hyper_body.is_end_stream(),
            Inner::Taken => true,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.0 {
            Inner::Once(None) => SizeHint::with_exact(0),
            Inner::Once(Some(bytes)) => SizeHint::with_exact(bytes.len() as u64),
            Inner::Streaming(hyper_body) => hyper_body.size_hint(),
            Inner::Taken => SizeHint::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[test]
    fn valid_size_hint() {
        assert_eq!(SdkBody::from("hello").size_hint().exact(), Some(5));
        assert_eq!(SdkBody::from("").size_hint().exact(), Some(0));
        assert_eq!(SdkBody::empty().content_length(), Some(0));
    }

    #[test]
    fn streaming_bodies_are_not_cloneable() {
        let body = SdkBody::from(hyper::Body::from("hello"));
        assert!(body.try_clone().is_none());
        assert!(body.bytes().is_none());
        let body = SdkBody::from("hello");
        assert_eq!(body.try_clone().unwrap().bytes(), Some("hello".as_bytes()));
    }

    #[tokio::test]
    async fn read_streaming_body() {
        let mut body = SdkBody::from(hyper::Body::from("streaming data"));
        let chunk = futures_chunk(&mut body).await;
        assert_eq!(chunk.as_deref(), Some("streaming data".as_bytes()));
    }

    #[test]
    fn take_leaves_taken_body() {
        let mut body = SdkBody::from("abc");
        let taken = body.take();
        assert_eq!(taken.bytes(), Some("abc".as_bytes()));
        assert!(body.bytes().is_none());
        assert!(body.is_end_stream());
    }

    async fn futures_chunk(body: &mut SdkBody) -> Option<bytes::Bytes> {
        body.data().await.map(|res| res.expect("valid chunk"))
    }
}
