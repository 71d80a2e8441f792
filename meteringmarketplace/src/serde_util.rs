/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

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

#[cfg(test)]
mod test {
    use crate::model::UsageRecord;
    use smithy_types::Instant;

    #[test]
    fn sub_second_usage_timestamps_round_trip() {
        let record = UsageRecord::builder()
            .timestamp(Instant::from_secs_and_nanos(1_700_000_000, 123_000_000))
            .customer_identifier("c-1")
            .dimension("users")
            .quantity(2)
            .build();
        let json = serde_json::to_string(&record).expect("serializes");
        assert!(json.contains(r#""Timestamp":1700000000.123"#), "{}", json);
        let parsed: UsageRecord = serde_json::from_str(&json).expect("parses");
        assert_eq!(parsed, record);
    }

    #[test]
    fn whole_seconds_are_integers() {
        let record = UsageRecord::builder()
            .timestamp(Instant::from_epoch_seconds(1613414417))
            .build();
        assert_eq!(
            serde_json::to_string(&record).expect("serializes"),
            r#"{"Timestamp":1613414417}"#
        );
    }
}
