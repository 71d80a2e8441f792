/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, NaiveDateTime, ParseError, TimeZone, Utc};

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

pub(crate) fn format_date(time: &DateTime<Utc>) -> String {
    time.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_date_time(time: &DateTime<Utc>) -> String {
    time.format(DATE_TIME_FORMAT).to_string()
}

#[allow(dead_code)]
pub(crate) fn parse_date_time(date_time_str: &str) -> Result<DateTime<Utc>, ParseError> {
    let date_time = NaiveDateTime::parse_from_str(date_time_str, DATE_TIME_FORMAT)?;
    Ok(Utc.from_utc_datetime(&date_time))
}

#[cfg(test)]
mod test {
    use crate::date_fmt::{format_date, format_date_time, parse_date_time};

    #[test]
    fn date_time_round_trip() {
        let date_time = parse_date_time("20150830T123600Z").expect("valid date");
        assert_eq!(format_date(&date_time), "20150830");
        assert_eq!(format_date_time(&date_time), "20150830T123600Z");
    }

    #[test]
    fn reject_invalid_date() {
        assert!(parse_date_time("2015-08-30T12:36:00Z").is_err());
    }
}
