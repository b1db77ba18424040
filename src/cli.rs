use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rekap-rpl")]
#[command(about = "Rekap RPL terakhir per TID dan jenis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log detail (debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tarik riwayat semua TID lalu buat rekap
    Run {
        /// File daftar TID (default: dari config)
        #[arg(short, long)]
        tids: Option<PathBuf>,

        /// File lokasi TID (default: dari config)
        #[arg(short, long)]
        lokasi: Option<PathBuf>,

        /// Direktori atau file output
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Format output (html/excel/csv/all)
        #[arg(short, long, default_value = "html")]
        format: ExportFormat,

        /// Jumlah request paralel per batch
        #[arg(short, long)]
        concurrency: Option<usize>,

        /// Endpoint API
        #[arg(long)]
        api_url: Option<String>,

        /// Awal periode query (YYYY-MM-DD)
        #[arg(long)]
        periode_awal: Option<String>,

        /// Hanya baris dengan durasi minimal N hari
        #[arg(long)]
        min_days: Option<i64>,

        /// Cari teks di semua kolom
        #[arg(short, long)]
        search: Option<String>,

        /// Batas durasi untuk warna alert
        #[arg(long)]
        alert_days: Option<i64>,
    },

    /// Tampilkan/ubah konfigurasi
    Config {
        /// Set endpoint API
        #[arg(long)]
        set_api_url: Option<String>,

        /// Set jumlah request paralel
        #[arg(long)]
        set_concurrency: Option<usize>,

        /// Tampilkan konfigurasi
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Html,
    Excel,
    Csv,
    All,
}

impl ExportFormat {
    pub fn includes_html(&self) -> bool {
        matches!(self, ExportFormat::Html | ExportFormat::All)
    }

    pub fn includes_excel(&self) -> bool {
        matches!(self, ExportFormat::Excel | ExportFormat::All)
    }

    pub fn includes_csv(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::All)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "csv" => Ok(ExportFormat::Csv),
            "all" => Ok(ExportFormat::All),
            _ => Err(format!("Format tidak dikenal: {}. Pakai html, excel, csv, atau all", s)),
        }
    }
}
