//! Human-readable renderings of timestamps and cron expressions.

use chrono::{DateTime, NaiveDateTime, Utc};

const PLACEHOLDER: &str = "--";

/// Parses RFC 3339 timestamps, or naive `YYYY-MM-DDTHH:MM:SS` values taken as UTC.
#[must_use]
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
                .map(|naive| naive.and_utc())
        })
}

/// `"2026-02-20 14:30 UTC"`; the raw text when unparseable, `"--"` when absent.
#[must_use]
pub fn format_timestamp(ts: Option<&str>) -> String {
    match ts.filter(|t| !t.trim().is_empty()) {
        None => PLACEHOLDER.to_owned(),
        Some(raw) => parse_timestamp(raw).map_or_else(
            || raw.to_owned(),
            |dt| dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
    }
}

/// Relative age of `ts` against the current time.
#[must_use]
pub fn time_ago(ts: Option<&str>) -> String {
    time_ago_at(ts, Utc::now())
}

/// Relative age of `ts` against `now`: `just now`, `5m ago`, `3h ago`, `2d ago`.
#[must_use]
pub fn time_ago_at(ts: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = ts.filter(|t| !t.trim().is_empty()) else {
        return PLACEHOLDER.to_owned();
    };
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let mins = (now - then).num_minutes();
    if mins < 1 {
        return "just now".to_owned();
    }
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Describes the common five-field cron shapes in words; anything else is
/// returned unchanged.
#[must_use]
pub fn cron_to_human(expr: &str) -> String {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    let [minute, hour, dom, month, dow] = fields.as_slice() else {
        return expr.to_owned();
    };
    let every = |field: &str| field.strip_prefix("*/").and_then(|n| n.parse::<u32>().ok());

    if (*dom, *month) != ("*", "*") {
        return expr.to_owned();
    }

    match (*minute, *hour, *dow) {
        ("*", "*", "*") => "Every minute".to_owned(),
        (m, "*", "*") if every(m).is_some() => plural(every(m).unwrap_or(1), "minute"),
        ("0", "*", "*") => "Every hour".to_owned(),
        ("0", h, "*") if every(h).is_some() => plural(every(h).unwrap_or(1), "hour"),
        (m, h, d) => match (m.parse::<u32>(), h.parse::<u32>()) {
            (Ok(m), Ok(h)) if m < 60 && h < 24 => {
                let at = clock(h, m);
                match d {
                    "*" => format!("Daily at {at}"),
                    "1-5" => format!("Weekdays at {at}"),
                    d => d
                        .parse::<usize>()
                        .ok()
                        .and_then(weekday)
                        .map_or_else(|| expr.to_owned(), |day| format!("Weekly on {day} at {at}")),
                }
            }
            (Ok(m), _) if m < 60 && h == "*" && d == "*" => format!("Every hour at :{m:02}"),
            _ => expr.to_owned(),
        },
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("Every {unit}")
    } else {
        format!("Every {n} {unit}s")
    }
}

fn clock(hour: u32, minute: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    if minute == 0 {
        format!("{h12} {suffix}")
    } else {
        format!("{h12}:{minute:02} {suffix}")
    }
}

fn weekday(day: usize) -> Option<&'static str> {
    const DAYS: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    DAYS.get(day % 7).copied().filter(|_| day <= 7)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 20, h, m, 0).unwrap()
    }

    #[test]
    fn cron_presets_render_in_words() {
        assert_eq!(cron_to_human("*/15 * * * *"), "Every 15 minutes");
        assert_eq!(cron_to_human("*/30 * * * *"), "Every 30 minutes");
        assert_eq!(cron_to_human("0 * * * *"), "Every hour");
        assert_eq!(cron_to_human("0 */6 * * *"), "Every 6 hours");
        assert_eq!(cron_to_human("0 9 * * *"), "Daily at 9 AM");
    }

    #[test]
    fn cron_other_shapes() {
        assert_eq!(cron_to_human("* * * * *"), "Every minute");
        assert_eq!(cron_to_human("30 17 * * *"), "Daily at 5:30 PM");
        assert_eq!(cron_to_human("0 0 * * 1"), "Weekly on Monday at 12 AM");
        assert_eq!(cron_to_human("0 8 * * 1-5"), "Weekdays at 8 AM");
        assert_eq!(cron_to_human("15 * * * *"), "Every hour at :15");
    }

    #[test]
    fn cron_unrecognised_is_returned_verbatim() {
        assert_eq!(cron_to_human("0 9 1 * *"), "0 9 1 * *");
        assert_eq!(cron_to_human("not a cron"), "not a cron");
        assert_eq!(cron_to_human(""), "");
    }

    #[test]
    fn time_ago_buckets() {
        let now = at(14, 30);
        assert_eq!(time_ago_at(Some("2026-02-20T14:29:45Z"), now), "just now");
        assert_eq!(time_ago_at(Some("2026-02-20T14:05:00Z"), now), "25m ago");
        assert_eq!(time_ago_at(Some("2026-02-20T11:30:00Z"), now), "3h ago");
        assert_eq!(time_ago_at(Some("2026-02-18T14:30:00Z"), now), "2d ago");
    }

    #[test]
    fn time_ago_handles_absent_and_garbage() {
        let now = at(14, 30);
        assert_eq!(time_ago_at(None, now), "--");
        assert_eq!(time_ago_at(Some(""), now), "--");
        assert_eq!(time_ago_at(Some("yesterday-ish"), now), "yesterday-ish");
    }

    #[test]
    fn future_timestamp_is_just_now() {
        assert_eq!(
            time_ago_at(Some("2026-02-20T15:00:00Z"), at(14, 30)),
            "just now"
        );
    }

    #[test]
    fn format_timestamp_renders_utc() {
        assert_eq!(
            format_timestamp(Some("2026-02-20T09:30:00-05:00")),
            "2026-02-20 14:30 UTC"
        );
        assert_eq!(format_timestamp(Some("2026-02-20T14:30:00.123")), "2026-02-20 14:30 UTC");
        assert_eq!(format_timestamp(Some("soon")), "soon");
        assert_eq!(format_timestamp(None), "--");
    }
}
