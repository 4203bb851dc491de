use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("portfolio");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("estimate"));
    Ok(())
}

#[test]
fn estimate_defaults_match_page_load() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("portfolio");
    cmd.arg("estimate");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Organization: University"))
        .stdout(predicate::str::contains("80h"))
        .stdout(predicate::str::contains("37h"))
        .stdout(predicate::str::contains("38%"))
        .stdout(predicate::str::contains("3.2×"));
}

#[test]
fn estimate_slider_extremes() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("portfolio");
    cmd.args(["estimate", "-r", "200", "-H", "8", "-a", "100"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1600h"))
        .stdout(predicate::str::contains("960h"))
        .stdout(predicate::str::contains("50%"))
        .stdout(predicate::str::contains("4.0×"));
}

#[test]
fn estimate_json_degrades_invalid_entries() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("portfolio");
    cmd.args([
        "estimate", "--json", "--org", "public-transport", "--reports", "abc", "--automation", "150",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["organization"], "public-transport");
    assert_eq!(json["input"]["reports_per_month"], 0.0);
    assert_eq!(json["input"]["automation_level"], 100.0);
    assert_eq!(json["result"]["baseline_hours"], 0.0);
    assert_eq!(json["result"]["visibility_lift"], 50.0);
    assert_eq!(json["roi_label"], "4.0");
}

#[test]
fn show_prints_every_panel() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("portfolio");
    cmd.env("PORTFOLIO_OWNER", "Test Owner");
    cmd.args(["show", "--org", "healthcare", "--width", "40", "--height", "8"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Test Owner — Analytics Portfolio"))
        .stdout(predicate::str::contains("could unlock for your Healthcare."))
        .stdout(predicate::str::contains("--- Skill Radar ---"))
        .stdout(predicate::str::contains("Plot: Q1 2022 .. Q4 2024"))
        .stdout(predicate::str::contains("Public Health @ BBMP"))
        .stdout(predicate::str::contains("37h/mo"));
}

#[test]
fn kpis_json_has_twelve_points() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("portfolio");
    cmd.args(["kpis", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 12);
    assert_eq!(points[0]["name"], "Q1 2022");
    assert_eq!(points[11]["impact"], 3.5);
}

#[test]
fn invalid_accent_is_a_config_error() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("portfolio");
    cmd.env("PORTFOLIO_ACCENT", "not-a-color");
    cmd.arg("estimate");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("PORTFOLIO_ACCENT"));
}
