//! Definisi tipe error

use thiserror::Error;

/// Error penulis laporan
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias Result
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_from_csv() {
        let csv_error = csv::Reader::from_reader("a,b\n1\n".as_bytes())
            .records()
            .find_map(|r| r.err())
            .unwrap();
        let error: Error = csv_error.into();
        assert!(matches!(error, Error::Csv(_)));
        assert!(error.to_string().starts_with("CSV error"));
    }
}
