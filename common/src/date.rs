//! Parsing tanggal dan perhitungan durasi
//!
//! Tanggal dari API datang dalam berbagai format. Semua dinormalisasi ke
//! `NaiveDate` (ditampilkan sebagai YYYY-MM-DD). String yang tidak dikenali
//! menghasilkan `None`, tidak pernah error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format tanggal kanonik
pub const YMD_FORMAT: &str = "%Y-%m-%d";

/// Format tanggal+jam tanpa zona waktu
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Format ringkas, hanya untuk tepat 8 digit
const COMPACT_FORMAT: &str = "%Y%m%d";

/// Format tanggal saja. Garis miring = urutan bulan/tanggal (US),
/// strip dan titik = tanggal-bulan-tahun.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Parse tanggal secara permisif
///
/// # Examples
/// ```
/// use rekap_rpl_common::date::parse_date;
/// use chrono::NaiveDate;
///
/// let d = parse_date("2024-03-01 08:15:00").unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert!(parse_date("bukan tanggal").is_none());
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Zona waktu tertulis: ambil tanggal pada offset tersebut
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    // chrono menerima hari 1 digit pada %d; "2024031" bukan tanggal
    if s.chars().all(|c| c.is_ascii_digit()) {
        return if s.len() == 8 {
            NaiveDate::parse_from_str(s, COMPACT_FORMAT).ok()
        } else {
            None
        };
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Tanggal kanonik dari nilai mentah (opsional)
pub fn canonical_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date)
}

/// Parse ketat YYYY-MM-DD (untuk konfigurasi)
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), YMD_FORMAT).ok()
}

pub fn format_ymd(date: NaiveDate) -> String {
    date.format(YMD_FORMAT).to_string()
}

/// Selisih hari kalender (today - date), bertanda.
/// Tanggal di masa depan menghasilkan nilai negatif.
pub fn age_in_days(date: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(date).num_days()
}
