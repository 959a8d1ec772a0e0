mod common;

use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn af2quickstart_without_arguments_writes_demo_files() {
    let d = tempdir().expect("tempdir should be creatable");

    let out = Command::new(env!("CARGO_BIN_EXE_af2quickstart"))
        .current_dir(d.path())
        .output()
        .expect("af2quickstart should run");

    assert!(out.status.success());
    assert_eq!(common::read(&d.path().join("demo_protein.fasta")), common::DEMO_FASTA);
    assert!(d.path().join("results").join("README.txt").is_file());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("KEY TERMS EXPLAINED"));
    assert!(stdout.contains("✅ Created: demo_protein.fasta\n"));
    assert!(stdout.contains("   colabfold_batch demo_protein.fasta results/\n"));
    assert!(stdout.contains("Created placeholder 'results/' folder"));
    assert!(!stdout.contains("./demo_protein"));
}

#[test]
fn foldguide_without_subcommand_runs_the_quickstart() {
    let d = tempdir().expect("tempdir should be creatable");

    let out = Command::new(env!("CARGO_BIN_EXE_foldguide"))
        .current_dir(d.path())
        .output()
        .expect("foldguide should run");

    assert!(out.status.success());
    assert_eq!(common::entries(d.path()), vec!["demo_protein.fasta", "results"]);
}

#[test]
fn quickstart_accepts_name_and_empty_sequence() {
    let d = tempdir().expect("tempdir should be creatable");

    let out = Command::new(env!("CARGO_BIN_EXE_foldguide"))
        .args([
            "quickstart",
            "-n",
            "x",
            "-s",
            "",
            "-o",
            d.path().to_str().expect("temp path should be utf-8"),
        ])
        .output()
        .expect("quickstart should run");

    assert!(out.status.success());
    assert_eq!(common::read(&d.path().join("x.fasta")), ">x\n");
}

#[test]
fn quickstart_reads_first_record_from_input_file() {
    let d = tempdir().expect("tempdir should be creatable");
    let input = d.path().join("in.fa");
    let seq = "MKV".repeat(30);
    common::write_input(&input, &[("ubiquitin_like", seq.as_str())], 60)
        .expect("input fasta should be writable");

    let out = Command::new(env!("CARGO_BIN_EXE_foldguide"))
        .args([
            "quickstart",
            "-i",
            input.to_str().expect("input path should be utf-8"),
            "-o",
            d.path().to_str().expect("temp path should be utf-8"),
        ])
        .output()
        .expect("quickstart should run");

    assert!(out.status.success());
    assert_eq!(
        common::read(&d.path().join("ubiquitin_like.fasta")),
        format!(">ubiquitin_like\n{}\n{}\n", &seq[..80], &seq[80..])
    );
}

#[test]
fn rejects_sequence_together_with_input() {
    let d = tempdir().expect("tempdir should be creatable");

    let out = Command::new(env!("CARGO_BIN_EXE_af2quickstart"))
        .current_dir(d.path())
        .args(["-s", "ACGT", "-i", "in.fa"])
        .output()
        .expect("af2quickstart should run");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot be used with"));
    assert!(common::entries(d.path()).is_empty());
}

#[test]
fn rejects_empty_name() {
    let d = tempdir().expect("tempdir should be creatable");

    let out = Command::new(env!("CARGO_BIN_EXE_af2quickstart"))
        .current_dir(d.path())
        .args(["-n", ""])
        .output()
        .expect("af2quickstart should run");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--name must not be empty"));
}

#[test]
fn unwritable_output_exits_non_zero() {
    let d = tempdir().expect("tempdir should be creatable");
    let blocker = d.path().join("blocker");
    fs::write(&blocker, "x").expect("blocker should be writable");

    let out = Command::new(env!("CARGO_BIN_EXE_af2quickstart"))
        .args(["-o", blocker.to_str().expect("blocker path should be utf-8")])
        .output()
        .expect("af2quickstart should run");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to create directory"));
}

#[test]
fn af3examples_writes_nothing_by_default() {
    let d = tempdir().expect("tempdir should be creatable");

    let out = Command::new(env!("CARGO_BIN_EXE_af3examples"))
        .current_dir(d.path())
        .output()
        .expect("af3examples should run");

    assert!(out.status.success());
    assert!(common::entries(d.path()).is_empty());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("AlphaFold 3 examples complete!"));
}

#[test]
fn af3_subcommand_exports_when_asked() {
    let d = tempdir().expect("tempdir should be creatable");

    let out = Command::new(env!("CARGO_BIN_EXE_foldguide"))
        .current_dir(d.path())
        .args(["af3", "-e", "upload"])
        .output()
        .expect("foldguide af3 should run");

    assert!(out.status.success());
    assert_eq!(common::entries(&d.path().join("upload")).len(), 3);
}

#[test]
fn quickstart_help_describes_every_option() {
    let out = Command::new(env!("CARGO_BIN_EXE_foldguide"))
        .args(["quickstart", "--help"])
        .output()
        .expect("foldguide quickstart --help should run");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--output_dir"));
    assert!(stdout.contains("Directory for the FASTA file and the results/ placeholder"));
}
