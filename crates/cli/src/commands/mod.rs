//! CLI command handlers

pub mod decide;
pub mod validate;

use anyhow::{Context, Result};
use kanadia_screening::validators::parse_date;
use kanadia_screening::{Clock, FixedClock, SystemClock};

/// Clock pinned to `--today` when given, the system date otherwise
pub fn clock_for(today: Option<&str>) -> Result<Box<dyn Clock>> {
    match today {
        Some(date) => {
            let date = parse_date(date)
                .with_context(|| format!("--today must be a YYYY-MM-DD date, got {date:?}"))?;
            Ok(Box::new(FixedClock::new(date)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_from_flag() {
        let clock = clock_for(Some("2014-06-01")).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2014, 6, 1).unwrap());
    }

    #[test]
    fn test_bad_today_flag() {
        assert!(clock_for(Some("06/01/2014")).is_err());
        assert!(clock_for(Some("2014-02-30")).is_err());
    }
}
