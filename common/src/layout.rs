//! Definisi kolom dan tampilan laporan
//!
//! Nama kolom tetap (prefix) dan konstanta tampilan yang dipakai bersama
//! oleh HTML view, Excel, dan CSV.

/// Placeholder untuk nilai kosong / tidak ada
pub const PLACEHOLDER: &str = "-";

pub const COL_NO: &str = "No";
pub const COL_TID: &str = "tid";
pub const COL_LOCATE: &str = "locate";
pub const COL_JENIS: &str = "jenis";
pub const COL_TGL: &str = "tglRpl_terakhir";
pub const COL_PERIODE: &str = "periode_opname_hari";

/// Kolom prioritas di depan, sisanya mengikuti urutan field pertama kali muncul
pub const PRIORITY_COLUMNS: [&str; 6] = [COL_NO, COL_TID, COL_LOCATE, COL_JENIS, COL_TGL, COL_PERIODE];

/// Suffix durasi: "69 Hari"
pub const DAYS_SUFFIX: &str = "Hari";

/// Batas default baris alert (hari)
pub const DEFAULT_ALERT_DAYS: i64 = 60;

/// Pilihan filter durasi di HTML view
pub const DURATION_OPTIONS: [i64; 5] = [7, 14, 30, 60, 90];

/// Warna baris (RGB)
pub const ROW_NORMAL_RGB: u32 = 0xFFFFB3; // kuning
pub const ROW_ALERT_RGB: u32 = 0xFFB3B3; // merah muda
pub const HEADER_RGB: u32 = 0xF8F9FA;

/// Nama sheet Excel
pub const SHEET_NAME: &str = "Rekap RPL";

/// Prefix nama file export
pub const EXPORT_FILE_PREFIX: &str = "rekap_rpl";

/// Format durasi
pub fn format_days(days: Option<i64>) -> String {
    match days {
        Some(d) => format!("{} {}", d, DAYS_SUFFIX),
        None => PLACEHOLDER.to_string(),
    }
}

/// Baris termasuk alert jika durasi >= batas
pub fn is_alert(days: Option<i64>, alert_days_min: i64) -> bool {
    matches!(days, Some(d) if d >= alert_days_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(Some(69)), "69 Hari");
        assert_eq!(format_days(Some(0)), "0 Hari");
        assert_eq!(format_days(Some(-1)), "-1 Hari");
        assert_eq!(format_days(None), "-");
    }

    #[test]
    fn test_is_alert() {
        assert!(is_alert(Some(60), 60));
        assert!(is_alert(Some(61), 60));
        assert!(!is_alert(Some(59), 60));
        assert!(!is_alert(None, 60));
    }
}
