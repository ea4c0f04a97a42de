use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jdeps-puml"))
}

fn run_counted(dir: &Path, depth: &str) -> Output {
    let src = dir.join("deps.txt");
    fs::write(&src, "  com.foo.A -> com.bar.B  x.jar\n").unwrap();
    Command::new(bin())
        .arg("counted")
        .arg(&src)
        .arg(dir.join("out.puml"))
        .args(["", "", depth])
        .output()
        .expect("run counted")
}

#[test]
fn cli_counted_writes_diagram() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = run_counted(dir.path(), "2");
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let diagram = fs::read_to_string(dir.path().join("out.puml")).unwrap();
    assert_eq!(diagram, "@startuml\n[com.foo] --> [com.bar] : 1\n@enduml\n");
}

#[test]
fn cli_rejects_negative_depth() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = run_counted(dir.path(), "-1");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("at least 1"));
    assert!(!dir.path().join("out.puml").exists());
}

#[test]
fn cli_rejects_zero_depth() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = run_counted(dir.path(), "0");
    assert!(!out.status.success());
    assert!(!dir.path().join("out.puml").exists());
}

#[test]
fn cli_rejects_non_integer_depth() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = run_counted(dir.path(), "two");
    assert!(!out.status.success());
    assert!(!dir.path().join("out.puml").exists());
}

#[test]
fn cli_rejects_missing_arguments() {
    let out = Command::new(bin())
        .args(["dedup", "deps.txt"])
        .output()
        .expect("run dedup");
    assert!(!out.status.success());
}
