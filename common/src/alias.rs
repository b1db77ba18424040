//! Alias nama field
//!
//! Respons API tidak punya skema tetap: tanggal, jenis, dan lokasi bisa
//! muncul dengan beberapa nama field. Setiap accessor memeriksa daftar alias
//! sesuai urutan prioritas dan mengembalikan nilai pertama yang tidak kosong.

use crate::types::{value_text, Record};

/// Alias field tanggal RPL (urutan prioritas)
pub const DATE_FIELDS: &[&str] = &[
    "tglRpl",
    "tgl_rpl",
    "tglRPL",
    "tgl",
    "tanggal",
    "date",
    "date_rpl",
    "tanggal_rpl",
    "dateRpl",
];

/// Substring nama field untuk fallback pencarian tanggal (case-insensitive)
pub const DATE_KEY_HINTS: &[&str] = &["tgl", "date"];

/// Alias field jenis RPL
pub const CATEGORY_FIELDS: &[&str] = &["jenis", "Jenis", "type", "tipe", "jns", "jenis_rpl", "JenisRpl"];

/// Alias field lokasi dari API (fallback jika tidak ada di file lokasi)
pub const LOCATION_FIELDS: &[&str] = &[
    "locate",
    "Locate",
    "lokasi",
    "Lokasi",
    "location",
    "Location",
    "merchant_locate",
    "merchantLocate",
    "site",
    "Site",
];

/// Jenis default jika tidak ditemukan
pub const DEFAULT_CATEGORY: &str = "-";

/// Nilai pertama yang tidak kosong (setelah trim) dari daftar alias
pub fn pick_first(record: &Record, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|k| record.text(k))
        .find(|v| !v.trim().is_empty())
}

/// Nilai tanggal mentah.
///
/// 1. Alias di `DATE_FIELDS`
/// 2. Field apa pun yang namanya mengandung "tgl" / "date"
pub fn pick_date_value(record: &Record) -> Option<String> {
    if let Some(v) = pick_first(record, DATE_FIELDS) {
        return Some(v);
    }

    record.iter().find_map(|(key, value)| {
        let lk = key.to_lowercase();
        if !DATE_KEY_HINTS.iter().any(|h| lk.contains(h)) {
            return None;
        }
        value_text(value).filter(|v| !v.trim().is_empty())
    })
}

/// Jenis RPL, default "-"
pub fn pick_category(record: &Record) -> String {
    pick_first(record, CATEGORY_FIELDS).unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Lokasi dari API, None jika tidak ada
pub fn pick_api_location(record: &Record) -> Option<String> {
    pick_first(record, LOCATION_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_date_priority() {
        let r = record(json!({"tanggal": "2024-01-01", "tglRpl": "2024-02-02"}));
        assert_eq!(pick_date_value(&r).as_deref(), Some("2024-02-02"));
    }

    #[test]
    fn test_date_skips_blank_alias() {
        let r = record(json!({"tglRpl": "  ", "tgl": "2024-03-03"}));
        assert_eq!(pick_date_value(&r).as_deref(), Some("2024-03-03"));
    }

    #[test]
    fn test_date_fallback_by_key_hint() {
        let r = record(json!({"status": "OK", "Last_Update_DATE": "2024-04-04", "tglSelesai": "2024-05-05"}));
        assert_eq!(pick_date_value(&r).as_deref(), Some("2024-04-04"));
    }

    #[test]
    fn test_date_fallback_skips_empty_values() {
        let r = record(json!({"tgl_input": "", "updated_date": null, "TglProses": "2024-06-06"}));
        assert_eq!(pick_date_value(&r).as_deref(), Some("2024-06-06"));
    }

    #[test]
    fn test_date_missing() {
        let r = record(json!({"status": "OK"}));
        assert_eq!(pick_date_value(&r), None);
    }

    #[test]
    fn test_category_default() {
        assert_eq!(pick_category(&record(json!({"x": 1}))), "-");
        assert_eq!(pick_category(&record(json!({"jenis": ""}))), "-");
        assert_eq!(pick_category(&record(json!({"tipe": "RPL-A", "jns": "B"}))), "RPL-A");
    }

    #[test]
    fn test_api_location() {
        assert_eq!(pick_api_location(&record(json!({"lokasi": "Bandung"}))).as_deref(), Some("Bandung"));
        assert_eq!(
            pick_api_location(&record(json!({"Site": "S1", "merchant_locate": "M1"}))).as_deref(),
            Some("M1")
        );
        assert_eq!(pick_api_location(&record(json!({"locate": " "}))), None);
    }
}
