#![allow(deprecated)]
use assert_cmd::Command;
use flate2::read::GzDecoder;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use tempfile::tempdir;

const DEPLOYMENT: &str = r#"---
instance_groups:
- name: group-1
  jobs:
  - name: job-1
    release: release-1
  - name: job-2
    release: release-1
  - name: job-3
    release: release-1
- name: group-2
  jobs:
  - name: job-3
    release: release-1
  - name: job-4
    release: release-2
"#;

/// Paths and payloads of a .tgz file, in stream order.
fn entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    archive
        .entries()
        .unwrap()
        .map(|e| {
            let mut e = e.unwrap();
            let path = String::from_utf8_lossy(&e.path_bytes()).into_owned();
            let mut data = Vec::new();
            e.read_to_end(&mut data).unwrap();
            (path, data)
        })
        .collect()
}

#[test]
fn build_writes_one_archive_per_release() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("deployment.yml");
    let out = dir.path().join("out");
    fs::write(&manifest, DEPLOYMENT).unwrap();

    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.arg("build")
        .arg(&manifest)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("release-1 (3 job(s))"))
        .stdout(predicate::str::contains("release-2 (1 job(s))"));

    let release_1 = fs::read(out.join("release-1.tgz")).unwrap();
    let paths: Vec<_> = entries(&release_1).into_iter().map(|(p, _)| p).collect();
    assert_eq!(
        paths,
        [
            "./jobs/",
            "./jobs/job-1.tgz",
            "./jobs/job-2.tgz",
            "./jobs/job-3.tgz",
            "./release.MF"
        ]
    );
    assert!(out.join("release-2.tgz").exists());
}

#[test]
fn build_respects_release_metadata_flags() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("deployment.yml");
    fs::write(&manifest, DEPLOYMENT).unwrap();

    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.arg("build")
        .arg(&manifest)
        .arg(dir.path())
        .args(["--release-version", "1.2.3", "--commit-hash", "cafe"])
        .arg("--uncommitted-changes")
        .assert()
        .success();

    let bytes = fs::read(dir.path().join("release-2.tgz")).unwrap();
    let (_, release_mf) = entries(&bytes).pop().unwrap();
    let text = String::from_utf8(release_mf).unwrap();
    assert!(text.contains("name: release-2"));
    assert!(text.contains("version: 1.2.3"));
    assert!(text.contains("commit_hash: cafe"));
    assert!(text.contains("uncommitted_changes: true"));
    assert!(text.contains("name: job-4"));
}

#[test]
fn build_with_fixed_mtime_is_reproducible() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("deployment.yml");
    fs::write(&manifest, DEPLOYMENT).unwrap();

    for out in ["a", "b"] {
        let mut cmd = Command::cargo_bin("stubrel").unwrap();
        cmd.arg("build")
            .arg(&manifest)
            .arg(dir.path().join(out))
            .env("SOURCE_DATE_EPOCH", "1700000000")
            .assert()
            .success();
    }

    let a = fs::read(dir.path().join("a/release-1.tgz")).unwrap();
    let b = fs::read(dir.path().join("b/release-1.tgz")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn build_missing_manifest_is_config_error() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.arg("build")
        .arg(dir.path().join("missing.yml"))
        .arg(dir.path().join("out"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn build_invalid_yaml_fails() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("broken.yml");
    fs::write(&manifest, "instance_groups: [").unwrap();

    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.arg("build")
        .arg(&manifest)
        .arg(dir.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse deployment description"));
}

#[test]
fn graph_prints_grouped_releases() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("deployment.yml");
    fs::write(&manifest, DEPLOYMENT).unwrap();

    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.arg("graph")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::eq(
            "release-1 -> [job-1, job-2, job-3]\nrelease-2 -> [job-4]\n",
        ));
}

#[test]
fn graph_reads_tile_metadata() {
    let dir = tempdir().unwrap();
    let metadata = dir.path().join("metadata.yml");
    fs::write(
        &metadata,
        "job_types:\n- name: router\n  templates:\n  - {name: gorouter, release: routing}\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.arg("graph")
        .arg(&metadata)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"routing\""))
        .stdout(predicate::str::contains("\"gorouter\""));
}

#[test]
fn fingerprint_prints_reference_vector() {
    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.args(["fingerprint", "random-job-name"])
        .assert()
        .success()
        .stdout("a5aee13168a3aac83734f8bbb1d292fe704aef2f  random-job-name\n");
}

#[test]
fn inspect_lists_members_in_order() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("deployment.yml");
    fs::write(&manifest, DEPLOYMENT).unwrap();

    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    cmd.arg("build").arg(&manifest).arg(dir.path()).assert().success();

    let mut cmd = Command::cargo_bin("stubrel").unwrap();
    let output = cmd
        .arg("inspect")
        .arg(dir.path().join("release-2.tgz"))
        .arg("--recursive")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    let jobs_dir = text.find("./jobs/\n").unwrap();
    let job = text.find("./jobs/job-4.tgz").unwrap();
    let monit = text.find("./monit").unwrap();
    let job_mf = text.find("./job.MF").unwrap();
    let release_mf = text.find("./release.MF").unwrap();
    assert!(jobs_dir < job && job < monit && monit < job_mf && job_mf < release_mf);
    assert!(text.contains("d 0755 root/root"));
    assert!(text.contains("- 0644 root/root        0 da39a3ee5e6b4b0d3255bfef95601890afd80709  ./monit"));
}
