use netname_platform::cmdline::{self, Source};
use netname_platform::Error;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_read_from_trims_trailing_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cmdline");
    std::fs::write(&path, "ro quiet net.naming-scheme=v239\n").unwrap();

    assert_eq!(
        cmdline::read_from(&path).unwrap(),
        "ro quiet net.naming-scheme=v239"
    );
}

#[test]
fn test_file_source_get_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cmdline");
    std::fs::write(&path, "BOOT_IMAGE=/vmlinuz net.naming-scheme=\"rhel-8.4\"\n").unwrap();

    let source = Source::File(path);
    assert_eq!(
        source.get_key("net.naming-scheme").unwrap(),
        Some("rhel-8.4".to_string())
    );
    assert_eq!(source.get_key("root").unwrap(), None);
}

#[test]
fn test_file_source_missing_file() {
    let source = Source::File(PathBuf::from("/nonexistent/netname/cmdline"));
    let err = source.get_key("net.naming-scheme").unwrap_err();
    assert!(matches!(err, Error::CmdlineRead { path, .. } if path == PathBuf::from("/nonexistent/netname/cmdline")));
}

#[test]
fn test_default_source_is_kernel() {
    assert_eq!(Source::default(), Source::Kernel);
}
