use khs::parser::load_instance;
use khs::validation::is_hitting_set;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_khs"))
}

/// Temp-dir file removed on drop, so failing asserts leave nothing behind
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(name: &str) -> Self {
        Self(std::env::temp_dir().join(format!("khs_{}_{}", std::process::id(), name)))
    }

    fn with_contents(name: &str, contents: &str) -> Self {
        let file = Self::new(name);
        fs::write(file.path(), contents).unwrap();
        file
    }

    fn path(&self) -> &Path {
        &self.0
    }

    fn arg(&self) -> &str {
        self.0.to_str().unwrap()
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute khs")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
}

/// Pull the solution out of "Hitting set (N elements): a b c"
fn parse_solution(stdout: &str) -> Option<Vec<u32>> {
    let line = stdout.lines().find(|l| l.starts_with("Hitting set"))?;
    let (_, elements) = line.split_once(':')?;
    elements
        .split_whitespace()
        .map(|t| t.parse().ok())
        .collect()
}

#[test]
fn test_generate_then_solve() {
    let instance_file = ScratchFile::new("generated.txt");

    let output = run(&[
        "generate",
        "--output",
        instance_file.arg(),
        "--universe",
        "30",
        "--subsets",
        "80",
        "--min-size",
        "2",
        "--max-size",
        "4",
        "--planted",
        "4",
        "--seed",
        "42",
    ]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Planted hitting set (size 4)"));
    assert!(!stdout.contains("Decoys:"));

    let output = run(&[
        "solve",
        instance_file.arg(),
        "--heuristic",
        "smallest-critical",
    ]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded n:30 m:80 c:"), "stdout: {}", stdout);
    assert!(stdout.contains(" k:4"), "stdout: {}", stdout);
    assert!(stdout.contains("Search Statistics:"));
    // Deterministic heuristic: no seed to report
    assert!(!stdout.contains("Seed:"));

    let solution = parse_solution(&stdout).expect("solution line");
    let instance = load_instance(instance_file.path()).unwrap();
    assert!(solution.len() <= 4);
    assert!(is_hitting_set(&solution, &instance));
}

#[test]
fn test_generate_with_decoys() {
    let instance_file = ScratchFile::new("decoys.txt");

    let output = run(&[
        "generate",
        "-o",
        instance_file.arg(),
        "--universe",
        "40",
        "--subsets",
        "100",
        "--planted",
        "5",
        "--decoys",
        "3",
        "--decoy-probability",
        "0.5",
        "--seed",
        "4",
    ]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let decoys: Vec<u32> = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Decoys: "))
        .expect("decoy line")
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(decoys.len(), 3);

    let instance = load_instance(instance_file.path()).unwrap();
    assert_eq!(instance.subset_count(), 100);

    let output = run(&[
        "generate",
        "-o",
        instance_file.arg(),
        "--decoy-probability",
        "2",
        "--decoys",
        "1",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("decoy probability"));
}

#[test]
fn test_solve_reports_no_solution() {
    let instance_file = ScratchFile::with_contents("disjoint.txt", "3 2 2 1\n1 2\n3\n");

    for heuristic in ["random", "critical", "smallest", "smallest-critical"] {
        let output = run(&[
            "solve",
            instance_file.arg(),
            "--heuristic",
            heuristic,
            "--seed",
            "1",
        ]);
        assert_success(&output);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains("No hitting set of size ≤ 1 found."),
            "{}: {}",
            heuristic,
            stdout
        );
        assert!(!stdout.contains("Note:"));
        let randomized = heuristic == "random" || heuristic == "critical";
        assert_eq!(stdout.contains("Seed: 1"), randomized, "{}", heuristic);
    }

    let output = run(&["solve", instance_file.arg(), "--budget", "2"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(parse_solution(&stdout).map(|s| s.len()), Some(2));
}

#[test]
fn test_greedy_failure_is_flagged_as_inconclusive() {
    // Committing to the most frequent element 1 strands {2,4} and {3,5}
    let instance_file = ScratchFile::with_contents(
        "greedy.txt",
        "5 6 2 2\n1 2\n1 3\n1 2\n1 3\n2 4\n3 5\n",
    );

    let output = run(&["solve", instance_file.arg(), "--heuristic", "greedy-critical"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No hitting set of size ≤ 2 found."), "{}", stdout);
    assert!(stdout.contains("Note: greedy-critical does not explore every branch"));
}

#[test]
fn test_solve_rejects_malformed_input() {
    let instance_file = ScratchFile::with_contents("malformed.txt", "3 1 2 1\n1 7\n");

    let output = run(&["solve", instance_file.arg()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("line 2: element 7 outside universe [1, 3]"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_solve_rejects_oversized_subset_count() {
    let instance_file = ScratchFile::with_contents("oversized.txt", "3 4000000000 2 1\n1 2\n");

    let output = run(&["solve", instance_file.arg()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("expected 4000000000 subsets, found 1"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_bench_writes_report() {
    let instance_file = ScratchFile::with_contents("bench.txt", "4 3 2 2\n1 2\n2 3\n3 4\n");
    let report_file = ScratchFile::new("bench_report.txt");

    let output = run(&[
        "bench",
        instance_file.arg(),
        "--repetitions",
        "2",
        "--report",
        report_file.arg(),
    ]);
    assert_success(&output);

    let report = fs::read_to_string(report_file.path()).unwrap();
    assert!(report.starts_with("Instance: n:4 m:3 c:2 k:2 (2 repetitions)"));
    for heuristic in ["random", "critical", "smallest", "smallest-critical"] {
        assert!(
            report.lines().any(|l| l.starts_with(heuristic)),
            "missing {} in\n{}",
            heuristic,
            report
        );
    }
}
