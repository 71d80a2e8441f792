/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as Smithy
//! [httpLabel](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httplabel-trait)

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use smithy_types::instant::Format;
use smithy_types::Instant;

const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// Percent-encode a label value. Greedy labels keep `/` so that a value can span several segments.
pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    crate::query::fmt_timestamp(t, format)
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;
    use proptest::prelude::*;

    #[test]
    fn greedy_params() {
        assert_eq!(fmt_string("a/b", false), "a%2Fb");
        assert_eq!(fmt_string("a/b", true), "a/b");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(fmt_string("my project", false), "my%20project");
        assert_eq!(
            fmt_string("arn:aws:lookoutvision:us-east-1:123:project/p", false),
            "arn%3Aaws%3Alookoutvision%3Aus-east-1%3A123%3Aproject%2Fp"
        );
        assert_eq!(fmt_string("a-b_c.d~e", false), "a-b_c.d~e");
    }

    proptest! {
        #[test]
        fn labels_never_contain_reserved_characters(s in ".*") {
            let encoded = fmt_string(&s, false);
            for reserved in &['/', '?', '#', ' ', '&', '='] {
                prop_assert!(!encoded.contains(*reserved));
            }
            let decoded = percent_encoding::percent_decode_str(&encoded).decode_utf8().unwrap();
            prop_assert_eq!(decoded, s.as_str());
        }
    }
}
