/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use chrono::format::Numeric::*;
use chrono::format::{Fixed, Item, Pad, Parsed, parse};
use chrono::{DateTime, Datelike, ParseResult, TimeZone, Utc};

/// `YYYYMMDDhhmmss[.sss]` as carried in MDTM replies (RFC 3659 time-val),
/// taken as UTC with no zone adjustment.
const TIME_VAL: &[Item<'static>] = &[
    Item::Numeric(Year, Pad::Zero),
    Item::Numeric(Month, Pad::Zero),
    Item::Numeric(Day, Pad::Zero),
    Item::Numeric(Hour, Pad::Zero),
    Item::Numeric(Minute, Pad::Zero),
    Item::Numeric(Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond),
];

#[inline]
pub(crate) fn parse_from_str(s: &str) -> ParseResult<DateTime<Utc>> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, s, TIME_VAL.iter())?;
    parsed.to_datetime_with_timezone(&Utc)
}

/// Best-effort conversion of the three date tokens of a UNIX listing line.
///
/// `Mon DD YYYY` maps to midnight UTC of that day. `Mon DD HH:MM` carries
/// no year (servers use this form for entries newer than about six
/// months) and is resolved against the current UTC year.
pub(crate) fn parse_listing_datetime(
    month: &str,
    day: &str,
    time_or_year: &str,
) -> Option<DateTime<Utc>> {
    let month = month_number(month)?;
    let day: u32 = day.parse().ok()?;
    if let Some((hour, minute)) = time_or_year.split_once(':') {
        let hour: u32 = hour.parse().ok()?;
        let minute: u32 = minute.parse().ok()?;
        let year = Utc::now().year();
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
    } else {
        let year: i32 = time_or_year.parse().ok()?;
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
    }
}

fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}
