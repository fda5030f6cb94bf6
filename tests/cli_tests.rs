use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn reorder(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_organpipe"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn organpipe");
    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(input)
        .expect("write stdin");
    child.wait_with_output().expect("organpipe failed")
}

#[test]
fn reorders_ranked_tokens() {
    let out = reorder(b"A\nB\nC\nD\nE\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"E\nC\nA\nB\nD\n");
}

#[test]
fn empty_input_prints_nothing() {
    let out = reorder(b"");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn single_token_round_trips() {
    let out = reorder(b"42\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"42\n");
}

#[test]
fn tokens_pass_through_byte_for_byte() {
    // Tokens are opaque; non-UTF-8 bytes survive the reordering.
    let out = reorder(b"\xff\n\xfe\nB\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"B\n\xff\n\xfe\n");
}

#[test]
fn crlf_terminators_are_not_token_content() {
    let out = reorder(b"A\r\nB\r\nC\r\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"C\nA\nB\n");
}

#[test]
fn stray_arguments_are_rejected() {
    let out = Command::new(env!("CARGO_BIN_EXE_organpipe"))
        .arg("extra")
        .output()
        .expect("organpipe failed");
    assert!(!out.status.success());
}

#[test]
fn freq_rank_prints_most_frequent_first() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");
    fs::write(&trace, "7\n3\n7\n9\n7\n3\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_freq_rank"))
        .arg(&trace)
        .output()
        .expect("freq_rank failed");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"7\n3\n9\n");
}

#[test]
fn freq_rank_top_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");
    fs::write(&trace, "7\n3\n7\n9\n7\n3\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_freq_rank"))
        .args([trace.to_str().unwrap(), "--top", "2", "--counts"])
        .output()
        .expect("freq_rank failed");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"7\t3\n3\t2\n");
}

#[test]
fn freq_rank_exports_csv() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");
    let csv_path = dir.path().join("ranking.csv");
    fs::write(&trace, "7\n3\n7\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_freq_rank"))
        .args([
            trace.to_str().unwrap(),
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .output()
        .expect("freq_rank failed");
    assert!(out.status.success());

    let exported = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(exported, "lba,count\n7,2\n3,1\n");
}

#[test]
fn freq_rank_missing_file_fails() {
    let out = Command::new(env!("CARGO_BIN_EXE_freq_rank"))
        .arg("no-such-trace.txt")
        .output()
        .expect("freq_rank failed");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error opening trace"), "stderr: {stderr}");
}

#[test]
fn seek_distance_reports_the_metric() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");
    fs::write(&trace, "0\n1\n0\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_seek_distance"))
        .arg(&trace)
        .output()
        .expect("seek_distance failed");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total seek distance: 2"), "stdout: {stdout}");
}

#[test]
fn seek_distance_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");
    fs::write(&trace, "0\n1\n0\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_seek_distance"))
        .args([trace.to_str().unwrap(), "--json"])
        .output()
        .expect("seek_distance failed");
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["accesses"], 3);
    assert_eq!(report["unique_lbas"], 2);
    assert_eq!(report["total_seek_distance"], 2);
}

#[test]
fn seek_distance_bad_lba_names_the_line() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");
    fs::write(&trace, "5\nxyz\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_seek_distance"))
        .arg(&trace)
        .output()
        .expect("seek_distance failed");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
}

#[test]
fn rank_reorder_measure_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.txt");
    let layout = dir.path().join("layout.txt");
    fs::write(&trace, "9\n2\n9\n5\n9\n2\n").unwrap();

    let ranked = Command::new(env!("CARGO_BIN_EXE_freq_rank"))
        .arg(&trace)
        .output()
        .expect("freq_rank failed");
    assert!(ranked.status.success());
    assert_eq!(ranked.stdout, b"9\n2\n5\n");

    let reordered = reorder(&ranked.stdout);
    assert!(reordered.status.success());
    assert_eq!(reordered.stdout, b"5\n9\n2\n");
    fs::write(&layout, &reordered.stdout).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_seek_distance"))
        .args([
            trace.to_str().unwrap(),
            "--layout",
            layout.to_str().unwrap(),
        ])
        .output()
        .expect("seek_distance failed");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total seek distance:"), "stdout: {stdout}");
}
