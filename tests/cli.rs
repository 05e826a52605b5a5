use std::fs;
use std::process::{Command, Output};

use camino::{Utf8Path, Utf8PathBuf};

const QUANT: &str = "quant.sf";

struct Workspace {
    _temp: tempfile::TempDir,
    metadata: Utf8PathBuf,
    root: Utf8PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let root = base.join("species");
        let mus = root.join("Mus");
        fs::create_dir_all(mus.join("SRR001")).unwrap();
        fs::write(mus.join("id2name.tsv"), "Alb\tENSMUST01\nApoe\tENSMUST03\n").unwrap();
        fs::write(
            mus.join("SRR001").join(QUANT),
            "ENSMUST01 1200 2.5 10\nENSMUST03 950 1.5 4\n",
        )
        .unwrap();
        let metadata = base.join("srr2metadata.txt");
        fs::write(&metadata, ">Mus\nSRR001,Liver M 1\n").unwrap();
        Self {
            _temp: temp,
            metadata,
            root,
        }
    }

    fn mus(&self) -> Utf8PathBuf {
        self.root.join("Mus")
    }

    fn run(&self) -> Output {
        run_bin(&[self.metadata.as_str(), self.root.as_str(), QUANT])
    }
}

fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kira-tpm-rollup"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn mkdir(path: &Utf8Path) {
    fs::create_dir(path).unwrap();
}

#[test]
fn prints_tree_on_success() {
    let workspace = Workspace::new();
    let output = workspace.run();

    assert!(output.status.success(), "{}", stderr(&output));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["Mus"]["M"]["Liver"]["1"]["geneDict"]["Alb"], 2.5);
    assert_eq!(parsed["Mus"]["total"]["geneDict"]["Apoe"], 1.5);
}

#[test]
fn skipped_directory_is_reported_by_default() {
    let workspace = Workspace::new();
    mkdir(&workspace.mus().join("logs"));
    let output = workspace.run();

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("no SRR accession"));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["Mus"]["total"]["geneDict"]["Alb"], 2.5);
}

#[test]
fn two_reference_files_exit_without_output() {
    let workspace = Workspace::new();
    fs::write(workspace.mus().join("notes.txt"), "scratch\n").unwrap();
    let output = workspace.run();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("too many files"));
}

#[test]
fn unknown_accession_exits_with_input_error() {
    let workspace = Workspace::new();
    let stray = workspace.mus().join("SRR999");
    mkdir(&stray);
    fs::write(stray.join(QUANT), "ENSMUST01 1 1.0\n").unwrap();
    let output = workspace.run();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn requires_three_arguments() {
    let workspace = Workspace::new();
    let output = run_bin(&[workspace.metadata.as_str(), workspace.root.as_str()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
