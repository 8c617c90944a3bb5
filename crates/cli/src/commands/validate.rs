//! Validator commands

use anyhow::{bail, Result};
use kanadia_screening::validators::{valid_passport_format, valid_visa};
use kanadia_screening::ScreeningConfig;

use super::clock_for;

pub fn check_passport(passport: &str) -> Result<()> {
    if !valid_passport_format(passport) {
        bail!("Invalid passport number: {passport}");
    }
    println!("✅ Valid passport number: {passport}");
    Ok(())
}

pub fn check_visa(code: &str, date: &str, today: Option<&str>) -> Result<()> {
    let today = clock_for(today)?.today();
    let window = ScreeningConfig::default().visa_validity();

    if !valid_visa(code, date, today, window) {
        bail!("Invalid or expired visa {code} issued {date} (as of {today})");
    }
    println!("✅ Valid visa {code} issued {date} (as of {today})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passport() {
        assert!(check_passport("6P294-42HR2-95PSF-93NFF-2TEWF").is_ok());
        assert!(check_passport("6P294-42HR2").is_err());
    }

    #[test]
    fn test_check_visa() {
        assert!(check_visa("CFR6X-XSMVA", "2013-09-22", Some("2014-06-01")).is_ok());
        assert!(check_visa("CFR6X-XSMVA", "2010-09-22", Some("2014-06-01")).is_err());
        assert!(check_visa("CFR6X", "2013-09-22", Some("2014-06-01")).is_err());
    }
}
