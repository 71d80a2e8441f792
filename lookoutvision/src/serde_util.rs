/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Wire encodings for shapes serde can't derive directly

/// Timestamps are JSON numbers of seconds since the epoch with millisecond precision
pub(crate) mod instant_epoch_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Instant;

    pub fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => {
                let millis = instant.epoch_millis();
                if millis.rem_euclid(1000) == 0 {
                    serializer.serialize_i64(millis.div_euclid(1000))
                } else {
                    serializer.serialize_f64(millis as f64 / 1000.0)
                }
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?
            .map(|seconds| Instant::from_epoch_millis((seconds * 1000.0).round() as i64)))
    }
}

/// Blobs are base64 strings
pub(crate) mod blob_base64 {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use smithy_types::Blob;

    pub fn serialize<S>(value: &Option<Blob>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(blob) => serializer.serialize_str(&smithy_http::base64::encode(blob)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Blob>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => smithy_http::base64::decode(encoded)
                .map(|decoded| Some(Blob::new(decoded)))
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::model::{DetectAnomalyResult, ProjectMetadata};
    use smithy_types::{Blob, Instant};

    #[test]
    fn whole_second_timestamps_are_integers() {
        let metadata = ProjectMetadata::builder()
            .project_name("circuit-boards")
            .creation_timestamp(Instant::from_epoch_seconds(1613414417))
            .build();
        let json = serde_json::to_value(&metadata).expect("serializes");
        assert_eq!(json["CreationTimestamp"], serde_json::json!(1613414417));
        assert!(json.get("ProjectArn").is_none());
    }

    #[test]
    fn fractional_timestamps_round_trip() {
        let parsed: ProjectMetadata =
            serde_json::from_str(r#"{"CreationTimestamp": 1613414417.25}"#).expect("valid json");
        let ts = parsed.creation_timestamp.expect("timestamp is set");
        assert_eq!(ts.epoch_seconds(), 1613414417);
        assert!(ts.has_nanos());
    }

    #[test]
    fn millisecond_timestamps_survive_serialization() {
        for millis in &[1_700_000_000_123_i64, 1_613_414_417_001, 1_613_414_417_999, -1_500] {
            let metadata = ProjectMetadata::builder()
                .creation_timestamp(Instant::from_epoch_millis(*millis))
                .build();
            let json = serde_json::to_string(&metadata).expect("serializes");
            let parsed: ProjectMetadata = serde_json::from_str(&json).expect("parses");
            assert_eq!(parsed, metadata, "{}", json);
        }

        // precision beyond milliseconds is not sent
        let precise = ProjectMetadata::builder()
            .creation_timestamp(Instant::from_secs_and_nanos(1_700_000_000, 123_456_789))
            .build();
        let json = serde_json::to_value(&precise).expect("serializes");
        assert_eq!(json["CreationTimestamp"], serde_json::json!(1700000000.123));
    }

    #[test]
    fn blobs_are_base64() {
        let result = DetectAnomalyResult::builder()
            .anomaly_mask(Blob::new(b"mask".to_vec()))
            .build();
        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["AnomalyMask"], serde_json::json!("bWFzaw=="));
        let parsed: DetectAnomalyResult = serde_json::from_value(json).expect("parses");
        assert_eq!(parsed, result);

        let bad = serde_json::from_str::<DetectAnomalyResult>(r#"{"AnomalyMask": "!!"}"#);
        assert!(bad.is_err());
    }
}
