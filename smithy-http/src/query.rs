/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use smithy_types::instant::Format;
use smithy_types::Instant;

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), UNRESERVED).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    fmt_string(t.fmt(format))
}

/// Simple abstraction to enable appending params to a string as query params
///
/// ```rust
/// use smithy_http::query::Writer;
/// let mut s = String::from("www.example.com");
/// let mut q = Writer::new(&mut s);
/// q.push_kv("key", "value");
/// q.push_v("another_value");
/// assert_eq!(s, "www.example.com?key=value&another_value");
/// ```
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Writer { out, prefix: '?' }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.out.push('=');
        self.out.push_str(v);
        self.prefix = '&';
    }

    pub fn push_v(&mut self, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(v);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, fmt_timestamp, Writer};
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
    }

    #[test]
    fn timestamps_are_encoded() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            fmt_timestamp(&instant, Format::DateTime),
            "2019-12-16T23%3A48%3A18Z"
        );
    }

    #[test]
    fn writer_uses_question_mark_then_ampersand() {
        let mut uri = String::from("/tags/arn");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("tagKeys", "a");
        writer.push_kv("tagKeys", "b");
        assert_eq!(uri, "/tags/arn?tagKeys=a&tagKeys=b");
    }
}
