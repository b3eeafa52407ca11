// tests/content_terms.rs
use filesift::content::{file_has_all, file_has_any, ContentScratch};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn terms(list: &[&str]) -> Vec<Vec<u8>> {
    list.iter().map(|t| t.as_bytes().to_vec()).collect()
}

#[test]
fn test_all_terms_present() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "a.txt", b"the quick brown fox");
    let mut scratch = ContentScratch::new();
    assert!(file_has_all(&path, &mut scratch, &terms(&["quick", "fox"])).unwrap());
    assert!(!file_has_all(&path, &mut scratch, &terms(&["quick", "dog"])).unwrap());
}

#[test]
fn test_any_term_present() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "a.txt", b"the quick brown fox");
    let mut scratch = ContentScratch::new();
    assert!(file_has_any(&path, &mut scratch, &terms(&["dog", "fox"])).unwrap());
    assert!(!file_has_any(&path, &mut scratch, &terms(&["dog", "cat"])).unwrap());
}

#[test]
fn test_term_spanning_chunk_boundary() {
    let dir = TempDir::new().unwrap();
    // 16-byte scratch; the term crosses the first read boundary
    let mut content = vec![b'x'; 12];
    content.extend_from_slice(b"needle");
    content.extend(vec![b'y'; 20]);
    let path = write_file(&dir, "span.bin", &content);
    let mut scratch = ContentScratch::with_capacity(16);
    assert!(file_has_any(&path, &mut scratch, &terms(&["needle"])).unwrap());
    assert!(file_has_all(&path, &mut scratch, &terms(&["needle"])).unwrap());
}

#[test]
fn test_terms_found_in_different_chunks() {
    let dir = TempDir::new().unwrap();
    let mut content = Vec::new();
    content.extend_from_slice(b"alpha");
    content.extend(vec![b'-'; 64]);
    content.extend_from_slice(b"omega");
    let path = write_file(&dir, "far.txt", &content);
    let mut scratch = ContentScratch::with_capacity(16);
    assert!(file_has_all(&path, &mut scratch, &terms(&["alpha", "omega"])).unwrap());
}

#[test]
fn test_empty_file_matches_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.txt", b"");
    let mut scratch = ContentScratch::new();
    assert!(!file_has_any(&path, &mut scratch, &terms(&["x"])).unwrap());
    assert!(!file_has_all(&path, &mut scratch, &terms(&["x"])).unwrap());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.txt");
    let mut scratch = ContentScratch::new();
    assert!(file_has_any(&path, &mut scratch, &terms(&["x"])).is_err());
}

#[test]
fn test_scratch_is_reusable_across_files() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", b"foo");
    let b = write_file(&dir, "b.txt", b"bar");
    let mut scratch = ContentScratch::new();
    assert!(file_has_all(&a, &mut scratch, &terms(&["foo"])).unwrap());
    assert!(!file_has_all(&b, &mut scratch, &terms(&["foo"])).unwrap());
    assert!(file_has_all(&b, &mut scratch, &terms(&["bar"])).unwrap());
}
