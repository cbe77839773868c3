use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;
use versioner::cli::{run_bump, BumpOptions, VersionChange};
use versioner::document::WriteOptions;
use versioner::domain::{Version, VersionBump};
use versioner::error::{ParseError, ReadError, UpdateFailure};
use versioner::manifest::ManifestEntry;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Workspace {
            dir: TempDir::new().expect("Could not create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> ManifestEntry {
        fs::write(self.path(name), contents).expect("Could not write fixture");
        self.entry(name, "version")
    }

    fn entry(&self, name: &str, field: &str) -> ManifestEntry {
        ManifestEntry::new(self.path(name).to_str().unwrap(), field)
    }

    fn read_json(&self, name: &str) -> Value {
        serde_json::from_str(&fs::read_to_string(self.path(name)).unwrap()).unwrap()
    }
}

fn change(results: &[versioner::cli::UpdateResult], index: usize) -> VersionChange {
    *results[index]
        .outcome
        .as_ref()
        .expect("entry should have succeeded")
}

#[test]
fn test_minor_bump_leaves_other_keys_untouched() {
    let ws = Workspace::new();
    let entry = ws.write("package.json", r#"{"version": "2.4.1", "name": "x"}"#);

    let results = run_bump(&[entry], VersionBump::Minor, BumpOptions::default());

    assert_eq!(
        change(&results, 0),
        VersionChange {
            previous: Version::new(2, 4, 1),
            new: Version::new(2, 5, 0),
        }
    );
    assert_eq!(
        ws.read_json("package.json"),
        json!({"version": "2.5.0", "name": "x"})
    );
}

#[test]
fn test_missing_file_does_not_block_later_entries() {
    let ws = Workspace::new();
    let first = ws.write("a.json", r#"{"version": "1.0.0"}"#);
    let missing = ws.entry("b.json", "version");
    let third = ws.write("c.json", r#"{"version": "0.9.9"}"#);

    let results = run_bump(&[first, missing, third], VersionBump::Patch, BumpOptions::default());

    assert_eq!(results.len(), 3);
    assert_eq!(change(&results, 0).new, Version::new(1, 0, 1));
    assert!(matches!(
        results[1].outcome,
        Err(UpdateFailure::Read(ReadError::Io { .. }))
    ));
    assert_eq!(change(&results, 2).new, Version::new(0, 9, 10));
    assert_eq!(ws.read_json("c.json"), json!({"version": "0.9.10"}));
}

#[test]
fn test_results_preserve_manifest_order() {
    let ws = Workspace::new();
    let entries = vec![
        ws.write("z.json", r#"{"version": "1.0.0"}"#),
        ws.write("a.json", r#"{"version": "2.0.0"}"#),
        ws.entry("m.json", "version"),
    ];

    let results = run_bump(&entries, VersionBump::Major, BumpOptions::default());

    let files: Vec<&str> = results.iter().map(|r| r.file.as_str()).collect();
    let expected: Vec<&str> = entries.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(files, expected);
}

#[test]
fn test_non_string_field_fails_without_modifying_file() {
    let ws = Workspace::new();
    let original = r#"{"version": 123, "name": "x"}"#;
    let entry = ws.write("package.json", original);

    let results = run_bump(&[entry], VersionBump::Patch, BumpOptions::default());

    assert!(matches!(
        results[0].outcome,
        Err(UpdateFailure::Read(ReadError::FieldMissingOrNotString { .. }))
    ));
    assert_eq!(fs::read_to_string(ws.path("package.json")).unwrap(), original);
}

#[test]
fn test_invalid_version_reported() {
    let ws = Workspace::new();
    let entry = ws.write("package.json", r#"{"version": "1.2.x"}"#);

    let results = run_bump(&[entry], VersionBump::Patch, BumpOptions::default());

    assert!(matches!(
        results[0].outcome,
        Err(UpdateFailure::Read(ReadError::InvalidVersion(_)))
    ));
}

#[test]
fn test_component_at_limit_fails_alone() {
    let ws = Workspace::new();
    let original = r#"{"version": "3.18446744073709551615.7"}"#;
    let at_limit = ws.write("limit.json", original);
    let after = ws.write("after.json", r#"{"version": "0.0.1"}"#);

    let results = run_bump(&[at_limit, after], VersionBump::Minor, BumpOptions::default());

    assert!(matches!(
        results[0].outcome,
        Err(UpdateFailure::Bump(ParseError::Overflow(..)))
    ));
    assert_eq!(fs::read_to_string(ws.path("limit.json")).unwrap(), original);
    assert_eq!(change(&results, 1).new, Version::new(0, 1, 0));
}

#[test]
fn test_rerun_bumps_again() {
    let ws = Workspace::new();
    let entry = ws.write("package.json", r#"{"version": "1.2.3"}"#);

    run_bump(&[entry.clone()], VersionBump::Patch, BumpOptions::default());
    let results = run_bump(&[entry], VersionBump::Patch, BumpOptions::default());

    assert_eq!(
        change(&results, 0),
        VersionChange {
            previous: Version::new(1, 2, 4),
            new: Version::new(1, 2, 5),
        }
    );
}

#[test]
fn test_duplicate_entries_bump_twice() {
    let ws = Workspace::new();
    let entry = ws.write("package.json", r#"{"version": "0.1.0"}"#);

    let results = run_bump(
        &[entry.clone(), entry],
        VersionBump::Minor,
        BumpOptions::default(),
    );

    assert_eq!(change(&results, 1).new, Version::new(0, 3, 0));
    assert_eq!(ws.read_json("package.json"), json!({"version": "0.3.0"}));
}

#[test]
fn test_custom_field_name() {
    let ws = Workspace::new();
    fs::write(
        ws.path("tauri.conf.json"),
        r#"{"package": {"productName": "app"}, "appVersion": "3.1.4"}"#,
    )
    .unwrap();
    let entry = ws.entry("tauri.conf.json", "appVersion");

    let results = run_bump(&[entry], VersionBump::Major, BumpOptions::default());

    assert_eq!(change(&results, 0).new, Version::new(4, 0, 0));
    assert_eq!(
        ws.read_json("tauri.conf.json"),
        json!({"package": {"productName": "app"}, "appVersion": "4.0.0"})
    );
}

#[test]
fn test_atomic_writes_through_options() {
    let ws = Workspace::new();
    let entry = ws.write("package.json", r#"{"version": "1.0.0"}"#);
    let options = BumpOptions {
        dry_run: false,
        write: WriteOptions {
            atomic: true,
            trailing_newline: true,
        },
    };

    let results = run_bump(&[entry], VersionBump::Patch, options);

    assert!(results[0].is_success());
    assert_eq!(
        fs::read_to_string(ws.path("package.json")).unwrap(),
        "{\n  \"version\": \"1.0.1\"\n}\n"
    );
}

#[cfg(unix)]
#[test]
fn test_write_failure_is_distinct_from_read_failure() {
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new();
    let entry = ws.write("package.json", r#"{"version": "1.0.0"}"#);
    let path = ws.path("package.json");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

    // Privileged users can write read-only files, so there is nothing to observe.
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let results = run_bump(&[entry], VersionBump::Patch, BumpOptions::default());

    assert!(matches!(results[0].outcome, Err(UpdateFailure::Write(_))));
}
