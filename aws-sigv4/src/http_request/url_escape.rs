/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// base set of characters that must be URL encoded
const BASE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn percent_encode(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, BASE_SET).to_string()
}

#[cfg(test)]
mod test {
    use super::percent_encode;

    #[test]
    fn unreserved_characters_are_kept() {
        assert_eq!(percent_encode("-_.~"), "-_.~");
        assert_eq!(percent_encode("a b/c"), "a%20b%2Fc");
        assert_eq!(percent_encode("ü"), "%C3%BC");
    }
}
