//! Calendar date display utilities.

use std::fmt;

use jiff::civil::Date;

/// Long human-readable form of a date: `Sunday, June 1st, 2025`.
pub struct LongDate<'a>(pub &'a Date);

impl fmt::Display for LongDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0.day();
        write!(
            f,
            "{} {}{}, {}",
            self.0.strftime("%A, %B"),
            day,
            ordinal_suffix(day),
            self.0.year()
        )
    }
}

/// Short form used while picking a date: `June 1, 2025`.
pub struct ShortDate<'a>(pub &'a Date);

impl fmt::Display for ShortDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}",
            self.0.strftime("%B"),
            self.0.day(),
            self.0.year()
        )
    }
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: i8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
