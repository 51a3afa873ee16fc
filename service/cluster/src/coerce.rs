//! Typed coercion of raw field values shared by the job and node parsers.

use chrono::NaiveDateTime;
use domain_cluster::model::entity::NOT_AVAILABLE;
use domain_cluster::model::vo::Coerced;

/// ctime-style timestamps printed by `qstat -f`, e.g. `Fri Mar 15 10:05:00 2024`.
const CTIME_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

pub fn count(value: Option<&str>) -> Coerced<u32> {
    value.and_then(|v| v.trim().parse().ok()).into()
}

pub fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// `user@host` to `user`.
pub fn account(value: Option<&str>) -> String {
    text(value.and_then(|v| v.split('@').next()))
}

pub fn ctime(value: Option<&str>) -> Coerced<NaiveDateTime> {
    let Some(value) = value else {
        return Coerced::Unparseable;
    };
    // Day of month is space padded.
    let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&value, CTIME_FORMAT).ok().into()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(Some(" 16 ")), Coerced::Parsed(16));
        assert_eq!(count(Some("sixteen")), Coerced::Unparseable);
        assert_eq!(count(None).unwrap_or_default(), 0);
    }

    #[test]
    fn test_text_and_account() {
        assert_eq!(text(Some("molecular_sim")), "molecular_sim");
        assert_eq!(text(Some("  ")), "N/A");
        assert_eq!(text(None), "N/A");
        assert_eq!(account(Some("alice@login01.cluster")), "alice");
        assert_eq!(account(Some("bob")), "bob");
        assert_eq!(account(Some("@realm")), "N/A");
        assert_eq!(account(None), "N/A");
    }

    #[test]
    fn test_ctime() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 4)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap();
        assert_eq!(ctime(Some("Mon Mar  4 09:05:00 2024")), Coerced::Parsed(expected));
        assert_eq!(ctime(Some("Mon Mar 4 09:05:00 2024")), Coerced::Parsed(expected));
        assert_eq!(ctime(Some("yesterday")), Coerced::Unparseable);
        assert_eq!(ctime(None), Coerced::Unparseable);
    }
}
