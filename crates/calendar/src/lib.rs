//! Business-day rules for the TARGET settlement calendar.
//!
//! [`Target::is_business_day`] is a pure predicate over a [`chrono::NaiveDate`].
//! Easter-dependent holidays are looked up in an embedded table of Easter
//! Monday dates covering 1900 through 2199; see [`easter_monday`].

mod easter;
mod error;
mod target;

pub use easter::easter_monday;
pub use error::Error;
pub use target::Target;

use chrono::NaiveDate;

/// A calendar that can tell business days from holidays.
pub trait BusinessDays {
    /// Returns true if `date` is a business day.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar has no rules for the date's year.
    fn is_business_day(&self, date: NaiveDate) -> Result<bool, Error>;
}
