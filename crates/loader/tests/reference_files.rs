//! Reference file loading and end-to-end decisions over fixture files

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use kanadia_core::Disposition;
use kanadia_loader::{
    decide_files, load_countries, load_travellers, load_watchlist, LoadError, ReferenceData,
    ReferenceKind, ReferencePaths,
};
use kanadia_screening::{FixedClock, ScreeningError};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2014, 6, 1).unwrap())
}

fn decide_fixture(travellers: &str) -> Result<Vec<Disposition>, LoadError> {
    decide_files(
        fixture(travellers),
        fixture("watchlist.json"),
        fixture("countries.json"),
        &clock(),
    )
}

#[test]
fn test_returning_citizens() {
    assert_eq!(
        decide_fixture("test_returning_citizen.json").unwrap(),
        vec![Disposition::Accept, Disposition::Accept]
    );
}

#[test]
fn test_watchlist_passport() {
    assert_eq!(
        decide_fixture("test_watchlist.json").unwrap(),
        vec![Disposition::Secondary]
    );
}

#[test]
fn test_quarantine() {
    assert_eq!(
        decide_fixture("test_quarantine.json").unwrap(),
        vec![Disposition::Quarantine]
    );
}

#[test]
fn test_incomplete_records() {
    assert_eq!(
        decide_fixture("test_completeness.json").unwrap(),
        vec![Disposition::Reject; 3]
    );
}

#[test]
fn test_entry_reasons() {
    assert_eq!(
        decide_fixture("test_entry_reason.json").unwrap(),
        vec![Disposition::Reject, Disposition::Reject, Disposition::Accept]
    );
}

#[test]
fn test_invalid_passports() {
    assert_eq!(
        decide_fixture("test_invalid_passport.json").unwrap(),
        vec![Disposition::Reject, Disposition::Reject]
    );
}

#[test]
fn test_visas() {
    assert_eq!(
        decide_fixture("test_invalid_visa.json").unwrap(),
        vec![Disposition::Reject, Disposition::Reject]
    );
    assert_eq!(
        decide_fixture("test_valid_visa.json").unwrap(),
        vec![Disposition::Accept, Disposition::Accept]
    );
}

#[test]
fn test_mistyped_fields_reject_only_that_traveller() {
    assert_eq!(
        decide_fixture("test_mistyped_fields.json").unwrap(),
        vec![
            Disposition::Accept,
            Disposition::Reject,
            Disposition::Reject,
            Disposition::Quarantine,
        ]
    );
}

#[test]
fn test_unknown_country_fails_run() {
    let err = decide_fixture("test_unknown_country.json").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Screening(ScreeningError::UnknownCountryCode { ref code, .. }) if code == "XYZ"
    ));
    assert_eq!(err.kind(), None);
}

#[test]
fn test_missing_file() {
    let err = decide_files(
        fixture("no_such_travellers.json"),
        fixture("watchlist.json"),
        fixture("countries.json"),
        &clock(),
    )
    .unwrap_err();

    assert!(matches!(err, LoadError::ResourceNotFound { .. }));
    assert_eq!(err.kind(), Some(ReferenceKind::Travellers));
}

#[test]
fn test_empty_path_is_not_found() {
    let err = load_watchlist("").unwrap_err();
    assert!(matches!(
        err,
        LoadError::ResourceNotFound {
            kind: ReferenceKind::Watchlist,
            ..
        }
    ));
}

#[test]
fn test_truncated_json() {
    let err = decide_fixture("test_invalid_file.json").unwrap_err();
    assert!(matches!(err, LoadError::MalformedReferenceData { .. }));
    assert_eq!(err.kind(), Some(ReferenceKind::Travellers));
}

#[test]
fn test_countries_checked_before_travellers() {
    let temp_dir = TempDir::new().unwrap();
    let countries = temp_dir.path().join("countries.json");
    fs::write(&countries, "not json").unwrap();

    let paths = ReferencePaths::new(
        temp_dir.path().join("missing.json"),
        fixture("watchlist.json"),
        &countries,
    );
    let err = ReferenceData::load(&paths).unwrap_err();

    assert_eq!(err.kind(), Some(ReferenceKind::Countries));
}

#[test]
fn test_bad_visa_flag_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("countries.json");
    fs::write(
        &path,
        r#"{"KAN": {"code": "KAN", "visitor_visa_required": "yes", "transit_visa_required": "0"}}"#,
    )
    .unwrap();

    let err = load_countries(&path).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MalformedReferenceData {
            kind: ReferenceKind::Countries,
            ..
        }
    ));
}

#[test]
fn test_watchlist_entry_missing_passport_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("watchlist.json");
    fs::write(&path, r#"[{"first_name": "Jane", "last_name": "Smith"}]"#).unwrap();

    assert!(matches!(
        load_watchlist(&path),
        Err(LoadError::MalformedReferenceData { .. })
    ));
}

#[test]
fn test_load_fixture_shapes() {
    let countries = load_countries(fixture("countries.json")).unwrap();
    assert_eq!(countries.len(), 5);
    assert_eq!(countries.advisory_codes(), vec!["LUG"]);

    let travellers = load_travellers(fixture("test_completeness.json")).unwrap();
    assert_eq!(travellers.len(), 3);
    assert!(travellers[0].last_name.is_none());

    let watchlist = load_watchlist(fixture("watchlist.json")).unwrap();
    assert_eq!(watchlist.len(), 3);
}

#[test]
fn test_reference_data_engine() {
    let paths = ReferencePaths::new(
        fixture("test_entry_reason.json"),
        fixture("watchlist.json"),
        fixture("countries.json"),
    );
    let data = ReferenceData::load(&paths).unwrap();
    let clock = clock();

    let reports = data.engine(&clock).screen_batch(&data.travellers).unwrap();

    assert_eq!(reports.len(), 3);
    assert!(reports[2].findings().is_empty());
    assert_eq!(reports[0].findings().len(), 1);
}
