/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HELLO_SHA1: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

// ============================================================================
// Helper Functions
// ============================================================================

fn write_pom(dir: &Path, dependencies: &str, properties: &str) {
    let pom = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <groupId>com.test</groupId>
    <artifactId>demo</artifactId>
    <version>1.0.0</version>
    <properties>{}</properties>
    <dependencies>{}</dependencies>
</project>"#,
        properties, dependencies
    );
    fs::write(dir.join("pom.xml"), pom).unwrap();
}

fn dependency(group_id: &str, artifact_id: &str, version: &str) -> String {
    format!(
        "<dependency><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version></dependency>",
        group_id, artifact_id, version
    )
}

/// Run the analyzer against `project` with an isolated local repository
/// and return the parsed JSON written to stdout.
fn analyze(project: &Path, repo: &Path, extra_args: &[&str]) -> serde_json::Value {
    let output = cargo_bin_cmd!("maven-analyzer")
        .env_remove("RUST_LOG")
        .arg("-d")
        .arg(project)
        .arg("--local-repository")
        .arg(repo)
        .args(extra_args)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let project = TempDir::new().unwrap();
        let repo = TempDir::new().unwrap();
        write_pom(project.path(), "", "");

        cargo_bin_cmd!("maven-analyzer")
            .arg("-d")
            .arg(project.path())
            .arg("--local-repository")
            .arg(repo.path())
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("maven-analyzer")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--local-repository"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("maven-analyzer")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("maven-analyzer"));
    }

    /// Exit code 1: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("maven-analyzer")
            .arg("--invalid-option")
            .assert()
            .code(1);
    }

    /// Exit code 1: Malformed -D definition
    #[test]
    fn test_exit_code_invalid_definition() {
        cargo_bin_cmd!("maven-analyzer")
            .args(["-D", "=oops"])
            .assert()
            .code(1);
    }

    /// Exit code 2: Analysis error - non-existent project path
    #[test]
    fn test_exit_code_nonexistent_path() {
        cargo_bin_cmd!("maven-analyzer")
            .args(["-d", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Maven project validation failed"));
    }

    /// Exit code 2: Analysis error - directory without pom.xml
    #[test]
    fn test_exit_code_missing_pom() {
        let project = TempDir::new().unwrap();

        cargo_bin_cmd!("maven-analyzer")
            .arg("-d")
            .arg(project.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("pom.xml not found"));
    }

    /// Exit code 2: Analysis error - dependency without a version
    #[test]
    fn test_exit_code_resolution_error() {
        let project = TempDir::new().unwrap();
        let repo = TempDir::new().unwrap();
        write_pom(
            project.path(),
            "<dependency><groupId>com.example</groupId><artifactId>lib</artifactId></dependency>",
            "",
        );

        cargo_bin_cmd!("maven-analyzer")
            .arg("-d")
            .arg(project.path())
            .arg("--local-repository")
            .arg(repo.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Dependency resolution failed"));
    }

    /// Exit code 3: IO error - output path is a directory
    #[test]
    fn test_exit_code_output_is_directory() {
        let project = TempDir::new().unwrap();
        let repo = TempDir::new().unwrap();
        write_pom(project.path(), "", "");

        cargo_bin_cmd!("maven-analyzer")
            .arg("-d")
            .arg(project.path())
            .arg("--local-repository")
            .arg(repo.path())
            .arg("-o")
            .arg(repo.path())
            .assert()
            .code(3);
    }
}

#[test]
fn test_e2e_project_without_dependencies() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(project.path(), "", "");

    let json = analyze(project.path(), repo.path(), &[]);

    assert_eq!(json["projectGroupId"], "com.test");
    assert_eq!(json["projectArtifactId"], "demo");
    assert_eq!(json["projectVersion"], "1.0.0");
    assert_eq!(json["totalDependencies"], 0);
    assert!(json["dependencies"].as_array().unwrap().is_empty());
}

#[test]
fn test_e2e_declared_property_substituted() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(
        project.path(),
        &dependency("org.junit.jupiter", "junit-jupiter-api", "${junit.version}"),
        "<junit.version>5.8.2</junit.version>",
    );

    let json = analyze(project.path(), repo.path(), &[]);

    assert_eq!(json["totalDependencies"], 1);
    assert_eq!(json["dependencies"][0]["version"], "5.8.2");
}

#[test]
fn test_e2e_undeclared_property_kept_with_warning() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(
        project.path(),
        &dependency("com.example", "lib", "${unknown.version}"),
        "",
    );

    let output = cargo_bin_cmd!("maven-analyzer")
        .env_remove("RUST_LOG")
        .arg("-d")
        .arg(project.path())
        .arg("--local-repository")
        .arg(repo.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dependencies"][0]["version"], "${unknown.version}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Property not found: ${unknown.version}"));
}

#[test]
fn test_e2e_fingerprint_from_local_repository() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(
        project.path(),
        &format!(
            "{}{}",
            dependency("org.slf4j", "slf4j-api", "2.0.9"),
            dependency("com.example", "absent", "1.0")
        ),
        "",
    );

    let jar_dir = repo.path().join("org/slf4j/slf4j-api/2.0.9");
    fs::create_dir_all(&jar_dir).unwrap();
    fs::write(jar_dir.join("slf4j-api-2.0.9.jar"), "hello").unwrap();

    let json = analyze(project.path(), repo.path(), &[]);

    assert_eq!(json["totalDependencies"], 2);
    assert_eq!(json["dependencies"][0]["sha1"], HELLO_SHA1);
    assert!(json["dependencies"][1].get("sha1").is_none());
}

#[test]
fn test_e2e_system_property_definition() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(
        project.path(),
        &dependency("com.example", "lib", "${lib.version}"),
        "",
    );

    let json = analyze(project.path(), repo.path(), &["-D", "lib.version=2.4.1"]);

    assert_eq!(json["dependencies"][0]["version"], "2.4.1");
}

#[test]
fn test_e2e_declared_property_wins_over_definition() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(
        project.path(),
        &dependency("com.example", "lib", "${lib.version}"),
        "<lib.version>1.0</lib.version>",
    );

    let json = analyze(project.path(), repo.path(), &["-D", "lib.version=2.4.1"]);

    assert_eq!(json["dependencies"][0]["version"], "1.0");
}

#[test]
fn test_e2e_output_file_with_parent_directories() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(project.path(), &dependency("com.example", "lib", "1.0"), "");
    let output_path = project.path().join("build/reports/dependencies.json");

    cargo_bin_cmd!("maven-analyzer")
        .arg("-d")
        .arg(project.path())
        .arg("--local-repository")
        .arg(repo.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output written to"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(json["totalDependencies"], 1);
}

#[test]
fn test_e2e_quiet_suppresses_summary() {
    let project = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    write_pom(project.path(), "", "");

    cargo_bin_cmd!("maven-analyzer")
        .env_remove("RUST_LOG")
        .arg("-d")
        .arg(project.path())
        .arg("--local-repository")
        .arg(repo.path())
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
