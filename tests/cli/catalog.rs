use crate::harness::TestContext;
use predicates::prelude::*;
use serde_json::Value;

fn export(ctx: &TestContext, section: &str) -> Vec<Value> {
    let output = ctx.cli().args(["catalog", section]).output().expect("failed to run catalog");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("catalog output should be a JSON array")
}

#[test]
fn catalog_services_are_ordered() {
    let ctx = TestContext::new();

    let services = export(&ctx, "services");
    assert_eq!(services.len(), 6);
    let orders: Vec<u64> =
        services.iter().map(|s| s["display_order"].as_u64().unwrap()).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);
    assert_eq!(services[0]["name"], "General Mechanical Repairs");
}

#[test]
fn catalog_choices_start_with_placeholder() {
    let ctx = TestContext::new();

    let choices = export(&ctx, "choices");
    assert_eq!(choices.len(), 7);
    assert_eq!(choices[0]["id"], 0);
    assert_eq!(choices[0]["label"], "Select a service...");
}

#[test]
fn catalog_sections_export_through_alias() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ct", "faqs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"question\""));
    assert_eq!(export(&ctx, "testimonials").len(), 3);
    assert!(!export(&ctx, "featured").is_empty());
}

#[test]
fn catalog_rejects_unknown_section() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["catalog", "prices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown catalog section 'prices'"));
}
