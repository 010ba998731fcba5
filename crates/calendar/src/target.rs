use chrono::{Datelike, NaiveDate, Weekday};

use crate::{BusinessDays, Error, easter_monday};

/// The TARGET calendar.
///
/// Holidays, besides Saturdays and Sundays:
/// - New Year's Day, 1 January
/// - Good Friday
/// - Easter Monday
/// - Labour Day, 1 May
/// - Christmas, 25 December
/// - Day of Goodwill, 26 December
/// - 31 December, in 1998 and 1999 only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Target;

impl Target {
    /// Returns true if `date` is neither a weekend nor a TARGET holiday.
    ///
    /// # Errors
    ///
    /// Returns [`Error::YearOutOfRange`] for years without Easter data.
    pub fn is_business_day(&self, date: NaiveDate) -> Result<bool, Error> {
        let holiday = self.is_holiday(date)?;
        Ok(!holiday && !is_weekend(date))
    }

    /// Returns true if `date` falls on a TARGET holiday, ignoring weekends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::YearOutOfRange`] for years without Easter data.
    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool, Error> {
        let year = date.year();
        let easter = easter_monday(year).ok_or(Error::YearOutOfRange { year })?;
        let day_of_year = date.ordinal();

        let holiday = matches!(
            (date.month(), date.day()),
            (1, 1)      // New Year's Day
            | (5, 1)    // Labour Day
            | (12, 25)  // Christmas
            | (12, 26)  // Day of Goodwill
        ) || day_of_year == easter - 3 // Good Friday
            || day_of_year == easter
            || (date.month() == 12 && date.day() == 31 && matches!(year, 1998 | 1999));

        Ok(holiday)
    }
}

impl BusinessDays for Target {
    fn is_business_day(&self, date: NaiveDate) -> Result<bool, Error> {
        Target::is_business_day(self, date)
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
