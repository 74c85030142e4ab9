use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Local wall-clock now, without zone.
pub fn now_naive() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse a `dd/mm/yyyy` document date.
///
/// Exactly three `/`-separated integer parts are required; single-digit day
/// or month is accepted. Anything else, including impossible calendar dates,
/// yields `None`.
pub fn parse_dmy(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('/');
    let (d, m, y) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let day: u32 = d.trim().parse().ok()?;
    let month: u32 = m.trim().parse().ok()?;
    let year: i32 = y.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// 23:59:59 of the given day: a document stays valid for its whole last day.
pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    // 23:59:59 always exists
    d.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}
