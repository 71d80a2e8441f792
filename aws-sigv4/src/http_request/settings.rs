/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::time::SystemTime;

/// HTTP signing parameters
#[derive(Debug)]
pub struct SigningParams<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub security_token: Option<&'a str>,

    pub region: &'a str,
    pub service_name: &'a str,

    /// Timestamp to use in the signature (should be `SystemTime::now()` unless testing).
    pub date_time: SystemTime,

    pub settings: SigningSettings,
}

/// HTTP-specific signing settings
#[derive(Debug, PartialEq, Default)]
#[non_exhaustive]
pub struct SigningSettings {
    /// We assume the URI will be encoded _once_ prior to transmission. Some services
    /// do not decode the path prior to checking the signature, requiring clients to actually
    /// _double-encode_ the URI in creating the canonical request in order to pass a signature check.
    pub uri_encoding: UriEncoding,

    /// Add an additional checksum header
    pub payload_checksum_kind: PayloadChecksumKind,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum PayloadChecksumKind {
    /// Add x-amz-checksum-sha256 to the canonical request
    ///
    /// This setting is required for S3
    XAmzSha256,

    /// Do not add an additional header when creating the canonical request
    ///
    /// This is "normal mode" and will work for services other than S3
    NoHeader,
}

impl Default for PayloadChecksumKind {
    fn default() -> Self {
        PayloadChecksumKind::NoHeader
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum UriEncoding {
    /// Re-encode the resulting URL (eg. %30 becomes `%2530)
    Double,

    /// Take the resulting URL as-is
    Single,
}

impl Default for UriEncoding {
    fn default() -> Self {
        UriEncoding::Double
    }
}
