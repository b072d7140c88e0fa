use crate::harness::TestContext;
use crate::harness::pages::SETTINGS;
use predicates::prelude::*;
use serde_json::Value;

fn config_json(ctx: &TestContext, extra_env: &[(&str, &str)]) -> Value {
    let mut cmd = ctx.cli();
    cmd.arg("config");
    for (key, value) in extra_env {
        cmd.env(key, value);
    }
    let output = cmd.output().expect("failed to run sitebind config");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("config output should be JSON")
}

#[test]
fn config_renders_record_from_settings() {
    let ctx = TestContext::new();
    ctx.write_settings(SETTINGS);

    let record = config_json(&ctx, &[]);
    assert_eq!(record["businessName"], "Acme Auto");
    assert_eq!(record["businessPhoneLink"], "4075550100");
    assert_eq!(record["businessPhone"], "(407) 555-0100");
    assert_eq!(record["businessEmail"], "service@acme.test");
    assert_eq!(record["mapsQueryEncoded"], "9+Elm+St%2C+Tampa%2C+FL");
    assert_eq!(record["currentYear"], "2031");
    assert_eq!(record["tagline"], "Straight and true");
}

#[test]
fn config_defaults_without_settings_file() {
    let ctx = TestContext::new();

    let record = config_json(&ctx, &[]);
    assert_eq!(record["businessName"], "Florida Alignment & Suspension");
    assert_eq!(record["businessPhoneLink"], "5551234567");
    assert!(record.get("currentYear").is_none());
}

#[test]
fn config_applies_environment_overrides() {
    let ctx = TestContext::new();
    ctx.write_settings(SETTINGS);

    let record = config_json(
        &ctx,
        &[("BUSINESS_PHONE", "+1 (813) 555-0199"), ("CALENDLY_URL", "https://calendly.com/acme")],
    );
    assert_eq!(record["businessPhoneLink"], "+18135550199");
    assert_eq!(record["calendlyUrl"], "https://calendly.com/acme");
}

#[test]
fn config_rejects_invalid_calendly_url() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("config")
        .env("CALENDLY_URL", "not a url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CALENDLY_URL"));
}

#[test]
fn config_js_format_assigns_window_global() {
    let ctx = TestContext::new();
    ctx.write_settings(SETTINGS);

    ctx.cli()
        .args(["cf", "--format", "js"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("window.SITE_CONFIG = {"))
        .stdout(predicate::str::contains("\"businessName\": \"Acme Auto\""));
}

#[test]
fn config_rejects_unknown_format() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["config", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config format 'yaml'"));
}
