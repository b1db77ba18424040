pub mod csv;
pub mod excel;
pub mod html;

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::pipeline::RunReport;
use chrono::NaiveDateTime;
use rekap_rpl_common::layout::EXPORT_FILE_PREFIX;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Nama dasar file: `rekap_rpl_YYYYMMDD_HHMMSS`
pub fn export_stem(now: NaiveDateTime) -> String {
    format!("{}_{}", EXPORT_FILE_PREFIX, now.format("%Y%m%d_%H%M%S"))
}

/// Direktori (atau path tanpa ekstensi) → nama bertimestamp;
/// path file → stem milik user dengan ekstensi format
pub fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let user_stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);
        parent.join(format!("{}.{}", user_stem, extension))
    }
}

/// Tulis semua output sesuai format, kembalikan path yang ditulis
pub fn export_report(
    report: &RunReport,
    format: &ExportFormat,
    output: &Path,
    now: NaiveDateTime,
) -> Result<Vec<PathBuf>> {
    let dir = if output.extension().is_none() {
        output
    } else {
        output.parent().unwrap_or_else(|| Path::new("."))
    };
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir)?;
    }
    let stem = export_stem(now);
    let mut written: Vec<PathBuf> = Vec::new();

    if format.includes_html() {
        let path = output_path_for_format(output, &stem, "html");
        println!("- HTML dibuat...");
        html::generate_html(report, &path)?;
        println!("✔ HTML: {}", path.display());
        written.push(path);
    }

    if !report.has_data() {
        if format.includes_excel() || format.includes_csv() {
            println!("- Tidak ada baris, Excel/CSV dilewati");
        }
        return Ok(written);
    }

    let visible = report.visible();

    if format.includes_excel() {
        let path = output_path_for_format(output, &stem, "xlsx");
        println!("- Excel dibuat...");
        match excel::generate_excel(&visible, &path, report.alert_days_min) {
            Ok(()) => {
                println!("✔ Excel: {}", path.display());
                written.push(path);
            }
            Err(e) => {
                // xlsx gagal → CSV
                warn!(error = %e, "Excel gagal, fallback ke CSV");
                println!("⚠ {} (fallback ke CSV)", e);
                let csv_path = output_path_for_format(output, &stem, "csv");
                csv::generate_csv(&visible, &csv_path)?;
                println!("✔ CSV: {}", csv_path.display());
                written.push(csv_path);
            }
        }
    }

    if format.includes_csv() {
        let path = output_path_for_format(output, &stem, "csv");
        if !written.contains(&path) {
            println!("- CSV dibuat...");
            csv::generate_csv(&visible, &path)?;
            println!("✔ CSV: {}", path.display());
            written.push(path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(8, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_export_stem() {
        assert_eq!(export_stem(now()), "rekap_rpl_20240310_080509");
    }

    #[test]
    fn test_output_path_for_format() {
        let stem = export_stem(now());
        assert_eq!(
            output_path_for_format(Path::new("out"), &stem, "xlsx"),
            PathBuf::from("out/rekap_rpl_20240310_080509.xlsx")
        );
        assert_eq!(
            output_path_for_format(Path::new("out/laporan.html"), &stem, "csv"),
            PathBuf::from("out/laporan.csv")
        );
    }
}
