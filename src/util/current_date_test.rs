use super::*;

const DATE: CalendarDate = CalendarDate { year: 2026, month: 10, day: 19 };

#[test]
fn format_date_english() {
    assert_eq!(format_date(DATE, "en"), "October 19, 2026");
}

#[test]
fn format_date_russian_uses_genitive_month() {
    assert_eq!(format_date(DATE, "ru"), "19 октября 2026 г.");
}

#[test]
fn format_date_unknown_language_falls_back_to_english() {
    assert_eq!(format_date(DATE, "de"), "October 19, 2026");
}

#[test]
fn format_date_clamps_out_of_range_month() {
    let date = CalendarDate { year: 2026, month: 0, day: 1 };
    assert_eq!(format_date(date, "en"), "January 1, 2026");
}

#[cfg(not(feature = "csr"))]
#[test]
fn today_is_unknown_off_browser() {
    assert_eq!(today(), None);
}
