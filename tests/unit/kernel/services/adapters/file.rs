use super::*;
use tempfile::tempdir;

#[test]
fn load_file_returns_exact_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.c");
    let content = "int main(void) {\r\n\treturn 0;\n}\n\n";
    std::fs::write(&path, content).unwrap();

    assert_eq!(load_file(&path).unwrap(), content);
}

#[test]
fn load_file_missing_reports_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.c");

    let err = load_file(&path).unwrap_err();
    match &err {
        FileError::Read { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("expected a read error, got {other:?}"),
    }
    assert!(err.to_string().contains("missing.c"));
}

#[test]
fn load_file_directory_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_file(dir.path()).is_err());
}

#[test]
fn load_file_rejects_invalid_utf8_as_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, b"caf\xe9\n").unwrap();

    match load_file(&path).unwrap_err() {
        FileError::Read { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
        }
        other => panic!("expected a read error, got {other:?}"),
    }
    assert_eq!(std::fs::read(&path).unwrap(), b"caf\xe9\n");
}

#[test]
fn save_file_truncates_previous_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "a much longer original body of text").unwrap();

    save_file(&path, "short").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn save_file_creates_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new.txt");

    save_file(&path, "").unwrap();
    assert!(path.is_file());
    assert_eq!(std::fs::read(&path).unwrap(), b"");
}

#[test]
fn save_file_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.txt");

    let err = save_file(&path, "x").unwrap_err();
    assert!(matches!(err, FileError::Write { .. }));
}
