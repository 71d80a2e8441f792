/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Functions to create signing keys and calculate signatures.

use crate::date_fmt::format_date;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

/// HashedPayload = Lowercase(HexEncode(Hash(requestPayload)))
pub fn sha256_hex_string(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(bytes.as_ref()))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Calculates a Sigv4 signature
pub fn calculate_signature(signing_key: impl AsRef<[u8]>, string_to_sign: &[u8]) -> String {
    hex::encode(hmac_sha256(signing_key.as_ref(), string_to_sign))
}

/// Generates a signing key for Sigv4
pub fn generate_signing_key(
    secret: &str,
    date: DateTime<Utc>,
    region: &str,
    service: &str,
) -> impl AsRef<[u8]> {
    // kSecret = your secret access key
    // kDate = HMAC("AWS4" + kSecret, Date)
    // kRegion = HMAC(kDate, Region)
    // kService = HMAC(kRegion, Service)
    // kSigning = HMAC(kService, "aws4_request")

    let secret = format!("AWS4{}", secret);
    let tag = hmac_sha256(secret.as_bytes(), format_date(&date).as_bytes());
    let tag = hmac_sha256(&tag, region.as_bytes());
    let tag = hmac_sha256(&tag, service.as_bytes());
    hmac_sha256(&tag, b"aws4_request")
}

#[cfg(test)]
mod test {
    use super::{calculate_signature, generate_signing_key, sha256_hex_string};
    use crate::date_fmt::parse_date_time;

    #[test]
    fn test_signature_calculation() {
        let secret = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
        let string_to_sign = "AWS4-HMAC-SHA256\n\
            20150830T123600Z\n\
            20150830/us-east-1/iam/aws4_request\n\
            f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59";
        let date = parse_date_time("20150830T123600Z").unwrap();

        let derived_key = generate_signing_key(secret, date, "us-east-1", "iam");
        let signature = calculate_signature(derived_key, string_to_sign.as_bytes());

        let expected = "5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7";
        assert_eq!(expected, &signature);
    }

    #[test]
    fn sign_payload_empty_string() {
        let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        let actual = sha256_hex_string(b"");
        assert_eq!(expected, actual);
    }
}
