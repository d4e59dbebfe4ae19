use crate::common::{Project, run_ok};

#[test]
fn missing_git_is_reported_once() {
    let project = Project::new().with_git_dir();
    let (stdout, stderr) = run_ok(&mut project.command_with_git("build-version-no-such-git-binary"));
    assert_eq!(stdout, "0.0.0");
    assert_eq!(stderr, "Ignoring Git tags: Git not found.\n");
}

#[cfg(unix)]
mod with_shell {
    use super::*;

    fn describe(output: &str) -> String {
        let project = Project::new().with_git_dir().with_describe_output(output);
        let (stdout, stderr) = run_ok(&mut project.command());
        assert!(stderr.is_empty(), "{stderr}");
        stdout
    }

    #[test]
    fn two_part_tag() {
        assert_eq!(describe("v2.3"), "2.3.0");
    }

    #[test]
    fn commit_count_becomes_patch() {
        assert_eq!(describe("v2.3-4-gabcdef1"), "2.3.4");
    }

    #[test]
    fn explicit_patch_wins() {
        assert_eq!(describe("v2.3.9-4-gabcdef1"), "2.3.9");
    }

    #[test]
    fn version_file_beats_tags() {
        let project = Project::new().with_version_file("8.0").with_git_dir().with_describe_output("v2.3");
        let (stdout, _) = run_ok(&mut project.command());
        assert_eq!(stdout, "8.0.0");
    }

    #[test]
    fn broken_version_file_does_not_fall_through() {
        let project = Project::new().with_version_file("x.y").with_git_dir().with_describe_output("v2.3");
        let (stdout, stderr) = run_ok(&mut project.command());
        assert_eq!(stdout, "0.0.0");
        assert_eq!(stderr.lines().count(), 1, "{stderr}");
        assert!(stderr.starts_with("Ignoring file: "), "{stderr}");
    }

    #[test]
    fn failing_describe_falls_back() {
        let project = Project::new().with_git_dir().with_describe_failure();
        let (stdout, stderr) = run_ok(&mut project.command());
        assert_eq!(stdout, "0.0.0");
        assert_eq!(stderr.lines().count(), 1, "{stderr}");
        assert!(stderr.starts_with("Ignoring Git tags: git describe: exited with"), "{stderr}");
        assert!(stderr.contains("No names found"), "{stderr}");
    }

    #[test]
    fn unrecognized_tag_falls_back() {
        let project = Project::new().with_git_dir().with_describe_output("release-1");
        let (stdout, stderr) = run_ok(&mut project.command());
        assert_eq!(stdout, "0.0.0");
        assert_eq!(stderr, "Ignoring Git tags: Cannot parse git describe output: release-1\n");
    }
}
