/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// The split between `parse_unloaded` and `parse_loaded` keeps the parsing code pure and sync
/// whenever possible and delegates actually reading the HTTP response to the caller when
/// the required behavior is simply "read to the end."
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<DescribeProjectOutput, LookoutVisionError>`
    type Output;

    /// Parse an HTTP response without reading the body. If the body must be provided to proceed,
    /// return `None`
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP response from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// `ParseStrictResponse` enables operations that _never_ need to stream the body incrementally to
/// have cleaner implementations. There is a blanket implementation of `ParseHttpResponse`.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;
    use http::Response;

    #[test]
    fn supports_streaming_body() {
        pub struct S3GetObject {
            pub body: SdkBody,
        }

        struct S3GetObjectParser;

        impl ParseHttpResponse<SdkBody> for S3GetObjectParser {
            type Output = S3GetObject;

            fn parse_unloaded(&self, response: &mut Response<SdkBody>) -> Option<Self::Output> {
                let body = response.body_mut().take();
                Some(S3GetObject { body })
            }

            fn parse_loaded(&self, _response: &Response<Bytes>) -> Self::Output {
                unimplemented!()
            }
        }

        let mut response = Response::new(SdkBody::from("hello"));
        let parsed = S3GetObjectParser
            .parse_unloaded(&mut response)
            .expect("parses without loading");
        assert_eq!(parsed.body.bytes(), Some("hello".as_bytes()));
    }

    #[test]
    fn strict_parsers_always_load() {
        struct Length;
        impl ParseStrictResponse for Length {
            type Output = usize;
            fn parse(&self, response: &Response<Bytes>) -> usize {
                response.body().len()
            }
        }
        let mut unloaded = Response::new(SdkBody::from("hello"));
        assert!(ParseHttpResponse::<SdkBody>::parse_unloaded(&Length, &mut unloaded).is_none());
        let loaded = Response::new(Bytes::from_static(b"hello"));
        assert_eq!(ParseHttpResponse::<SdkBody>::parse_loaded(&Length, &loaded), 5);
    }
}
