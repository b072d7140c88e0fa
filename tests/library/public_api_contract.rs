use crate::harness::pages::{HOME_PAGE, PLAIN_PAGE, SETTINGS};
use assert_fs::prelude::*;
use predicates::prelude::*;
use sitebind::{
    AppError, BindRequest, CatalogSection, ConfigFormat, SiteConfig, TEMPLATE_BUSINESS_NAME,
    bind_dir, bind_file, catalog_export, load_record, render_site_config, site_config,
    validate_contact,
};
use std::fs;
use tempfile::TempDir;

fn request(name: &str) -> BindRequest {
    BindRequest {
        config: SiteConfig {
            business_name: Some(name.to_string()),
            business_email: Some("desk@shop.test".to_string()),
            ..SiteConfig::default()
        },
        template_business_name: TEMPLATE_BUSINESS_NAME.to_string(),
    }
}

#[test]
fn bind_file_returns_html_without_output() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("index.html");
    fs::write(&page, HOME_PAGE).unwrap();

    let outcome = bind_file(&page, None, &request("Lib Garage")).unwrap();

    let html = outcome.html.expect("html returned for stdout");
    assert!(html.contains("<title>Home | Lib Garage</title>"));
    assert_eq!(outcome.pages.len(), 1);
    assert_eq!(outcome.pages[0].path, "index.html");
    assert_eq!(outcome.pages[0].stats.title, 1);
    assert_eq!(outcome.pages[0].stats.mailto, 1);
    assert_eq!(fs::read_to_string(&page).unwrap(), HOME_PAGE);
}

#[test]
fn bind_dir_mirrors_pages_and_reports_sorted() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("src");
    let out = temp.child("out");
    src.child("services/tires.html").write_str(HOME_PAGE).unwrap();
    src.child("about.html").write_str(PLAIN_PAGE).unwrap();
    src.child("logo.svg").write_str("<svg><title>Logo</title></svg>").unwrap();

    let outcome = bind_dir(src.path(), out.path(), &request("Lib Garage")).unwrap();

    let paths: Vec<_> = outcome.pages.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, vec!["about.html", "services/tires.html"]);
    assert!(outcome.html.is_none());
    assert_eq!(outcome.totals().title, 1);
    out.child("logo.svg").assert(predicate::path::missing());
    out.child("about.html").assert(PLAIN_PAGE);
    out.child("services/tires.html")
        .assert(predicate::str::contains(r#"action="mailto:desk@shop.test""#));
}

#[test]
fn bind_dir_rejects_missing_directory() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");

    let err = bind_dir(&missing, &missing, &request("Lib Garage")).unwrap_err();
    assert!(matches!(err, AppError::InputNotFound(_)));
}

#[test]
fn settings_file_derives_record() {
    let settings: sitebind::SiteSettings = toml::from_str(SETTINGS).unwrap();

    let record = site_config(&settings);
    assert_eq!(record.business_phone_link.as_deref(), Some("4075550100"));
    assert_eq!(record.text("tagline"), Some("Straight and true"));

    let js = render_site_config(&record, ConfigFormat::Js).unwrap();
    assert!(js.starts_with("window.SITE_CONFIG = {"));
    assert!(js.ends_with("};"));
}

#[test]
fn record_files_round_trip_through_loader() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("record.json");
    fs::write(&path, r#"{"businessName":"Json Garage","promo":"10% off"}"#).unwrap();

    let record = load_record(&path).unwrap();
    assert_eq!(record.business_name(), Some("Json Garage"));
    assert_eq!(record.text("promo"), Some("10% off"));

    let err = load_record(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, AppError::InputNotFound(_)));
}

#[test]
fn catalog_sections_export_as_json() {
    for section in CatalogSection::ALL {
        let json = catalog_export(section).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.as_array().is_some_and(|items| !items.is_empty()), "{section} is empty");
    }
}

#[test]
fn contact_submissions_are_checked_against_catalog_services() {
    let accepted = validate_contact(
        r#"{"name": "Jo Driver", "email": "jo@example.com", "service_id": 2,
            "message": "Front end clunks over bumps.", "urgency": "urgent"}"#,
    )
    .unwrap();
    assert!(accepted.is_empty(), "{accepted:?}");

    let rejected = validate_contact(
        r#"{"name": "J", "email": "jo@", "service_id": 42, "message": "short",
            "vehicle_year": 1850}"#,
    )
    .unwrap();
    let fields: Vec<_> = rejected.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["name", "email", "service_id", "message", "vehicle_year"]);

    let err = validate_contact(r#"{"urgency": "whenever"}"#).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}
