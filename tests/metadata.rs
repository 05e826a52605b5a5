use std::fs;
use std::io::Cursor;

use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use kira_tpm_rollup::error::RollupError;
use kira_tpm_rollup::metadata::MetadataIndex;

fn parse(text: &str) -> Result<MetadataIndex, RollupError> {
    MetadataIndex::parse(Cursor::new(text))
}

#[test]
fn accessions_belong_to_their_marker_species() {
    let index = parse(">Mus\nSRR001,Liver M 1\nSRR002,Liver M 2\n>Rattus\nSRR010,Kidney F 1\n")
        .unwrap();

    assert_eq!(index.species(), ["Mus".to_string(), "Rattus".to_string()]);
    assert_eq!(index.len(), 3);
    assert_eq!(index.lookup("SRR001").unwrap().species, "Mus");
    assert_eq!(index.lookup("SRR002").unwrap().species, "Mus");

    let rat = index.lookup("SRR010").unwrap();
    assert_eq!(rat.species, "Rattus");
    assert_eq!(rat.tissue, "Kidney");
    assert_eq!(rat.sex, "F");
    assert_eq!(rat.replicate, 1);
}

#[test]
fn species_name_is_trimmed() {
    let index = parse(">  Danio rerio  \nSRR5,Fin M 1\n").unwrap();
    assert_eq!(index.species(), ["Danio rerio".to_string()]);
}

#[test]
fn blank_lines_are_skipped() {
    let index = parse("\n>Mus\n\nSRR001,Liver M 1\n   \n").unwrap();
    assert_eq!(index.len(), 1);
}

#[test]
fn repeated_species_is_listed_once() {
    let index = parse(">Mus\nSRR001,Liver M 1\n>Rattus\nSRR010,Kidney F 1\n>Mus\nSRR002,Liver M 2\n")
        .unwrap();
    assert_eq!(index.species(), ["Mus".to_string(), "Rattus".to_string()]);
    assert_eq!(index.lookup("SRR002").unwrap().species, "Mus");
}

#[test]
fn replicate_must_be_integer() {
    let err = parse(">Mus\nSRR001,Liver M 1\nSRR002,Liver M two\n").unwrap_err();
    assert_matches!(err, RollupError::InvalidReplicate { line: 3, ref value } if value == "two");
}

#[test]
fn record_before_marker() {
    let err = parse("SRR001,Liver M 1\n>Mus\n").unwrap_err();
    assert_matches!(err, RollupError::RecordBeforeSpecies { line: 1 });
}

#[test]
fn unknown_accession_lookup() {
    let index = parse(">Mus\nSRR001,Liver M 1\n").unwrap();
    assert!(index.get("SRR999").is_none());
    assert_matches!(index.lookup("SRR999"), Err(RollupError::UnknownAccession(_)));
}

#[test]
fn load_reads_file_from_disk() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("srr2metadata.txt")).unwrap();
    fs::write(&path, ">Mus\n\nSRR001,Liver M 1\nSRR002,Liver M x\n").unwrap();

    let err = MetadataIndex::load(&path).unwrap_err();
    assert_matches!(err, RollupError::InvalidReplicate { line: 4, .. });

    fs::write(&path, ">Mus\n\nSRR001,Liver M 1\n").unwrap();
    let index = MetadataIndex::load(&path).unwrap();
    assert_eq!(index.lookup("SRR001").unwrap().species, "Mus");
}

#[test]
fn load_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("absent.txt")).unwrap();
    assert_matches!(MetadataIndex::load(&path), Err(RollupError::Filesystem(_)));
}
