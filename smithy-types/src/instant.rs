/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64).round() as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Instant at `epoch_millis` milliseconds since the epoch. Negative values count backwards.
    pub fn from_epoch_millis(epoch_millis: i64) -> Self {
        Instant {
            seconds: epoch_millis.div_euclid(1000),
            subsecond_nanos: (epoch_millis.rem_euclid(1000) * 1_000_000) as u32,
        }
    }

    /// Milliseconds since the epoch. Sub-millisecond precision is truncated.
    pub fn epoch_millis(&self) -> i64 {
        self.seconds * 1000 + (self.subsecond_nanos / 1_000_000) as i64
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos)
            .single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    // chrono pads fractional seconds to 3, 6 or 9 digits
                    let mut rfc3339 = rfc3339.trim_end_matches('Z').to_owned();
                    if rfc3339.contains('.') {
                        rfc3339 = rfc3339.trim_end_matches('0').to_owned();
                    }
                    rfc3339.push('Z');
                    rfc3339
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn fractional_round_trip() {
        let instant = Instant::from_fractional_seconds(1605627600, 0.5);
        assert_eq!(instant.epoch_seconds(), 1605627600);
        assert!(instant.has_nanos());
        assert_eq!(instant.epoch_fractional_seconds(), 1605627600.5);
        assert_eq!(instant.fmt(Format::EpochSeconds), "1605627600.5");
    }

    #[test]
    fn epoch_millis() {
        let instant = Instant::from_epoch_millis(1_700_000_000_123);
        assert_eq!(instant, Instant::from_secs_and_nanos(1_700_000_000, 123_000_000));
        assert_eq!(instant.epoch_millis(), 1_700_000_000_123);
        assert_eq!(
            Instant::from_epoch_millis(-1),
            Instant::from_secs_and_nanos(-1, 999_000_000)
        );
        assert_eq!(
            Instant::from_secs_and_nanos(5, 999_999_999).epoch_millis(),
            5_999
        );
    }

    #[test]
    fn from_system_time() {
        let time = UNIX_EPOCH + Duration::from_millis(1_613_414_417_250);
        let instant = Instant::from_system_time(time);
        assert_eq!(instant.epoch_seconds(), 1_613_414_417);
        assert_eq!(instant.fmt(Format::DateTime), "2021-02-15T18:40:17.25Z");
    }

    #[test]
    fn before_epoch() {
        let time = UNIX_EPOCH - Duration::from_millis(500);
        let instant = Instant::from_system_time(time);
        assert_eq!(instant, Instant::from_secs_and_nanos(-1, 500_000_000));
    }
}
