use super::*;

#[test]
fn copyright_line_includes_year_when_known() {
    assert_eq!(copyright_line(Some(2026), "Elena Nerli"), "© 2026 Elena Nerli");
}

#[test]
fn copyright_line_without_year() {
    assert_eq!(copyright_line(None, "Elena Nerli"), "© Elena Nerli");
}
