//! Integration tests for the ytt CLI.

use clap::Parser;
use ytt::cli::{run_cli, Cli};

const URL: &str = "https://youtu.be/jNQXAC9IVRw";

#[test]
#[ignore = "network I/O required"]
fn get_downloads_transcript_as_srt() {
    let temp_dir = std::env::temp_dir().join("ytt-test");

    // Clean up previous test run
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }
    std::fs::create_dir_all(&temp_dir).expect("failed to create temp dir");

    let output = temp_dir.join("zoo.srt");
    let cli = Cli::parse_from([
        "ytt",
        "get",
        URL,
        "-f",
        "srt",
        "-o",
        output.to_str().unwrap(),
    ]);

    run_cli(cli).expect("failed to download transcript");

    let content = std::fs::read_to_string(&output).expect("srt file not written");
    assert!(content.contains("-->"), "no cues in output: {content}");
}

#[test]
fn batch_reports_bad_rows_without_aborting() {
    let temp_dir = tempfile::tempdir().unwrap();
    let jobs = temp_dir.path().join("jobs.csv");
    let outdir = temp_dir.path().join("downloads");

    // Bad rows fail before any network I/O: one unknown format, one
    // unusable URL.
    std::fs::write(
        &jobs,
        "URL,format,outputfileName\n\
         https://youtu.be/aaaaaaaaaaa,doc,broken\n\
         https://www.youtube.com/,json,\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "ytt",
        "batch",
        jobs.to_str().unwrap(),
        "--outdir",
        outdir.to_str().unwrap(),
    ]);

    run_cli(cli).expect("batch run should not abort on row errors");
    assert!(outdir.exists());
}

#[test]
fn batch_zip_replaces_directory_with_archive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let jobs = temp_dir.path().join("jobs.csv");
    let outdir = temp_dir.path().join("downloads");

    std::fs::write(
        &jobs,
        "URL,format,outputfileName\n\
         https://www.youtube.com/,json,\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "ytt",
        "batch",
        jobs.to_str().unwrap(),
        "--outdir",
        outdir.to_str().unwrap(),
        "--zip",
    ]);

    run_cli(cli).expect("batch run should not abort");

    assert!(!outdir.exists());
    assert!(outdir.with_extension("zip").exists());
}
