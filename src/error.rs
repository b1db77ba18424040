use thiserror::Error;

#[derive(Error, Debug)]
pub enum RekapError {
    #[error("Kesalahan konfigurasi: {0}")]
    Config(String),

    #[error("File tidak ditemukan: {0}")]
    FileNotFound(String),

    #[error("Daftar TID kosong: {0}")]
    EmptyTidList(String),

    #[error("Gagal membuat HTTP client: {0}")]
    HttpClient(String),

    #[error("Gagal membuat Excel: {0}")]
    ExcelGeneration(String),

    #[error("Tidak ada data yang berhasil ditampilkan.")]
    NoData,

    #[error("Kesalahan parsing JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Gagal membuat CSV: {0}")]
    Common(#[from] rekap_rpl_common::Error),
}

pub type Result<T> = std::result::Result<T, RekapError>;
