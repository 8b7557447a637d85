use super::{OutputConfig, OutputWriter};
use std::fs;
use tempfile::tempdir;

#[test]
fn write_to_file_stores_content_verbatim() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("body.txt");
    let writer = OutputWriter::new(OutputConfig {
        file: Some(path.clone()),
        silent: false,
    });

    writer.write("hello world").expect("write");
    assert_eq!(fs::read_to_string(&path).expect("read"), "hello world");
}

#[test]
fn write_to_file_replaces_previous_content() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("body.txt");
    fs::write(&path, "stale content that is longer").expect("seed");

    let writer = OutputWriter::new(OutputConfig {
        file: Some(path.clone()),
        ..OutputConfig::default()
    });
    writer.write("fresh").expect("write");
    assert_eq!(fs::read_to_string(&path).expect("read"), "fresh");
}
