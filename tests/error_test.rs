//! Kasus error: sumber TID, konfigurasi, pesan error

use rekap_rpl::config::Config;
use rekap_rpl::error::RekapError;
use rekap_rpl::fetcher::{FetchError, FetchNote};
use rekap_rpl::source;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_missing_tid_file() {
    let result = source::load_tids(Path::new("/nonexistent/path/12345/tids.txt"));
    assert!(matches!(result, Err(RekapError::FileNotFound(_))));
}

#[test]
fn test_blank_tid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tids.txt");
    std::fs::write(&path, "\n \n\t\n").unwrap();

    assert!(matches!(source::load_tids(&path), Err(RekapError::EmptyTidList(_))));
}

#[test]
fn test_missing_location_file_is_empty_map() {
    let dir = tempdir().expect("Failed to create temp dir");
    let map = source::load_location_map(&dir.path().join("tids_lokasi.txt")).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_invalid_api_url_rejected() {
    let mut config = Config::default();
    config.api_url = "203.153.103.122/api".into();
    assert!(matches!(config.validate(), Err(RekapError::Config(_))));
}

#[test]
fn test_error_display() {
    let errors = vec![
        RekapError::Config("concurrency minimal 1".to_string()),
        RekapError::FileNotFound("tids.txt".to_string()),
        RekapError::EmptyTidList("tids.txt".to_string()),
        RekapError::HttpClient("tls".to_string()),
        RekapError::ExcelGeneration("Excel".to_string()),
        RekapError::NoData,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "pesan error kosong");
    }
    assert_eq!(RekapError::NoData.to_string(), "Tidak ada data yang berhasil ditampilkan.");
}

#[test]
fn test_fetch_note_display() {
    let cases = [
        (FetchError::EmptyResponse, "TID T1: response kosong / gagal."),
        (FetchError::InvalidJson, "TID T1: gagal parsing JSON."),
        (FetchError::Status(502), "TID T1: HTTP 502."),
    ];
    for (error, expected) in cases {
        let note = FetchNote { tid: "T1".into(), error };
        assert_eq!(note.to_string(), expected);
    }
}

#[test]
fn test_csv_writer_error_converts_to_common() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk penuh");
    let err: RekapError = rekap_rpl_common::Error::from(io_error).into();
    assert!(matches!(err, RekapError::Common(_)));
    assert_eq!(err.to_string(), "Gagal membuat CSV: IO error: disk penuh");
}
