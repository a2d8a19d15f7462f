pub mod dates;

pub use dates::{days_until_next, is_leap_year, local_today, occurrence_in_year};
