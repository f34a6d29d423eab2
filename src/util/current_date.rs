//! Calendar date for the header and footer.

#[cfg(test)]
#[path = "current_date_test.rs"]
mod current_date_test;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November",
    "December",
];

// Genitive forms, as used after a day number ("19 октября").
const MONTHS_RU: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября", "октября", "ноября",
    "декабря",
];

/// A local calendar date. `month` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Today's local date, if the environment has a clock.
pub fn today() -> Option<CalendarDate> {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        Some(CalendarDate {
            year: i32::try_from(now.get_full_year()).ok()?,
            month: now.get_month() + 1,
            day: now.get_date(),
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Format `date` for `lang`. Unknown languages use English.
pub fn format_date(date: CalendarDate, lang: &str) -> String {
    let idx = date.month.clamp(1, 12) as usize - 1;
    match lang {
        "ru" => format!("{} {} {} г.", date.day, MONTHS_RU[idx], date.year),
        _ => format!("{} {}, {}", MONTHS_EN[idx], date.day, date.year),
    }
}
