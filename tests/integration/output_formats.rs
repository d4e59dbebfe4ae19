use crate::common::{Project, run_ok};

#[test]
fn plain_output_has_no_trailing_newline() {
    for project in [Project::new(), Project::new().with_version_file("1"), Project::new().with_version_file("?")] {
        let (stdout, _) = run_ok(&mut project.command());
        assert!(!stdout.ends_with('\n'), "{stdout:?}");
        assert!(!stdout.ends_with("\r\n"), "{stdout:?}");
    }
}

#[test]
fn json_reports_source() {
    let project = Project::new().with_version_file("3.2.1");
    let (stdout, _) = run_ok(project.command().args(["--format", "json"]));
    assert!(!stdout.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "major": 3, "minor": 2, "patch": 1, "source": "file" }));
}

#[test]
fn json_fallback_is_default_source() {
    let project = Project::new();
    let (stdout, _) = run_ok(project.command().args(["--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["source"], "default");
    assert_eq!(value["major"], 0);
}
