use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use simple_error::{SimpleError, SimpleResult};

/// `YYYY-MM-DD`, every field zero padded.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    strict_date(s).ok_or_else(|| format!("not a valid date: '{}'", s))
}

/// `HH`, `HH:MM`, `HH:MM:SS` or `HH:MM:SS` with a 3 or 6 digit fraction.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    strict_time(s).ok_or_else(|| format!("not a valid time: '{}'", s))
}

fn strict_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year = digits(parts.next()?, 4)?;
    let month = digits(parts.next()?, 2)?;
    let day = digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn strict_time(s: &str) -> Option<NaiveTime> {
    let (hms, frac) = match s.split_once('.') {
        Some((hms, frac)) => (hms, Some(frac)),
        None => (s, None),
    };
    let fields = hms
        .split(':')
        .map(|f| digits(f, 2))
        .collect::<Option<Vec<u32>>>()?;
    let micro = match (fields.len(), frac) {
        (_, None) => 0,
        (3, Some(f)) if f.len() == 3 => digits(f, 3)? * 1000,
        (3, Some(f)) => digits(f, 6)?,
        _ => return None,
    };
    match fields.as_slice() {
        [h] => NaiveTime::from_hms_opt(*h, 0, 0),
        [h, m] => NaiveTime::from_hms_opt(*h, *m, 0),
        // leap seconds are not valid input
        [h, m, sec] => NaiveTime::from_hms_micro_opt(*h, *m, *sec, micro),
        _ => None,
    }
}

fn digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Combines the optional publish date and time into one timestamp.
///
/// Both halves or neither must be given, and a scheduled time may not lie
/// before `now`.
pub fn resolve_publish_at(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    now: NaiveDateTime,
) -> SimpleResult<Option<NaiveDateTime>> {
    let publish_at = match (date, time) {
        (None, None) => return Ok(None),
        (Some(d), Some(t)) => d.and_time(t),
        _ => {
            return Err(SimpleError::new(
                "Must specify both publish_at date and time for scheduling",
            ))
        }
    };
    if publish_at < now {
        return Err(SimpleError::new("Must specify a time in the future"));
    }
    Ok(Some(publish_at))
}

pub fn format_publish_at(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
