//! Pembentukan baris laporan
//!
//! LatestRecord → FinalRow: lokasi, tanggal terakhir, durasi opname,
//! urut durasi terlama di atas, lalu nomor urut.

use crate::alias::pick_api_location;
use crate::date::{age_in_days, format_ymd};
use crate::layout::{format_days, COL_JENIS, COL_LOCATE, COL_NO, COL_PERIODE, COL_TGL, COL_TID, PLACEHOLDER, PRIORITY_COLUMNS};
use crate::types::{FinalRow, LatestRecord, LocationMap};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref LEADING_INT: Regex = Regex::new(r"-?\d+").expect("regex valid");
}

/// Nilai urut untuk baris tanpa angka hari (selalu paling bawah)
const NO_DAYS_SORT_KEY: i64 = i64::MIN;

/// Tabel laporan: baris + urutan kolom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<FinalRow>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Angka hari dari teks durasi ("69 Hari" → 69)
pub fn day_number(text: &str) -> Option<i64> {
    LEADING_INT
        .find(text)
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Lokasi: file lokasi → field API → "-"
pub fn resolve_location(tid: &str, latest: &LatestRecord, locations: &LocationMap) -> String {
    if let Some(loc) = locations.get(tid) {
        return loc.to_string();
    }
    pick_api_location(&latest.record).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Satu LatestRecord → FinalRow (tanpa nomor urut)
pub fn enrich(latest: LatestRecord, locations: &LocationMap, today: NaiveDate) -> FinalRow {
    let tid = Some(latest.record.tid())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let locate = resolve_location(&tid, &latest, locations);
    let days = latest.canonical_date.map(|d| age_in_days(d, today));
    let tgl = latest
        .canonical_date
        .map(format_ymd)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let mut fields = latest.record;
    fields.insert(COL_TID, tid);
    fields.insert(COL_JENIS, latest.category);
    fields.insert(COL_LOCATE, locate);
    fields.insert(COL_TGL, tgl);
    fields.insert(COL_PERIODE, format_days(days));

    FinalRow { fields }
}

/// Urut durasi menurun (stabil), baris tanpa angka di bawah
pub fn sort_rows(rows: &mut [FinalRow]) {
    rows.sort_by_key(|r| std::cmp::Reverse(day_number(&r.cell(COL_PERIODE)).unwrap_or(NO_DAYS_SORT_KEY)));
}

/// Nomor urut 1..n sesuai urutan saat ini
pub fn assign_numbers(rows: &mut [FinalRow]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.fields.insert(COL_NO, (i + 1) as u64);
    }
}

/// Urutan kolom: prefix tetap, lalu field lain sesuai kemunculan pertama
pub fn column_order(rows: &[FinalRow]) -> Vec<String> {
    let mut ordered: Vec<String> = PRIORITY_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut seen: HashSet<String> = ordered.iter().cloned().collect();

    for row in rows {
        for key in row.fields.keys() {
            if seen.insert(key.clone()) {
                ordered.push(key.clone());
            }
        }
    }
    ordered
}

/// Bangun tabel laporan lengkap
pub fn build_report(latest: Vec<LatestRecord>, locations: &LocationMap, today: NaiveDate) -> ReportTable {
    let mut rows: Vec<FinalRow> = latest
        .into_iter()
        .map(|r| enrich(r, locations, today))
        .collect();
    sort_rows(&mut rows);
    assign_numbers(&mut rows);
    let columns = if rows.is_empty() { Vec::new() } else { column_order(&rows) };
    ReportTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn latest(value: serde_json::Value, date: Option<NaiveDate>) -> LatestRecord {
        let record: Record = serde_json::from_value(value).unwrap();
        let category = crate::alias::pick_category(&record);
        LatestRecord {
            record,
            category,
            canonical_date: date,
        }
    }

    fn row_with_days(text: &str) -> FinalRow {
        let mut fields = Record::new();
        fields.insert(COL_PERIODE, text);
        FinalRow { fields }
    }

    #[test]
    fn test_day_number() {
        assert_eq!(day_number("69 Hari"), Some(69));
        assert_eq!(day_number("-1 Hari"), Some(-1));
        assert_eq!(day_number("-"), None);
        assert_eq!(day_number(""), None);
    }

    #[test]
    fn test_age_formatting() {
        let today = ymd(2024, 3, 10);
        let cases = [(ymd(2024, 3, 7), "3 Hari"), (today, "0 Hari"), (ymd(2024, 3, 11), "-1 Hari")];
        for (date, expected) in cases {
            let row = enrich(latest(json!({"tid": "T1"}), Some(date)), &LocationMap::new(), today);
            assert_eq!(row.cell(COL_PERIODE), expected);
        }
        let row = enrich(latest(json!({"tid": "T1"}), None), &LocationMap::new(), today);
        assert_eq!(row.cell(COL_PERIODE), "-");
        assert_eq!(row.cell(COL_TGL), "-");
    }

    #[test]
    fn test_location_resolution() {
        let today = ymd(2024, 3, 10);
        let map: LocationMap = [("T1", "Jakarta")].into_iter().collect();

        let row = enrich(latest(json!({"tid": "T1", "lokasi": "Bandung"}), None), &map, today);
        assert_eq!(row.cell(COL_LOCATE), "Jakarta");

        let row = enrich(latest(json!({"tid": "T2", "lokasi": "Bandung"}), None), &map, today);
        assert_eq!(row.cell(COL_LOCATE), "Bandung");

        let row = enrich(latest(json!({"tid": "T3"}), None), &map, today);
        assert_eq!(row.cell(COL_LOCATE), "-");
    }

    #[test]
    fn test_sort_descending_unparsable_last() {
        let mut rows: Vec<FinalRow> = ["10 Hari", "90 Hari", "-", "30 Hari"]
            .iter()
            .map(|t| row_with_days(t))
            .collect();
        sort_rows(&mut rows);
        let order: Vec<String> = rows.iter().map(|r| r.cell(COL_PERIODE)).collect();
        assert_eq!(order, ["90 Hari", "30 Hari", "10 Hari", "-"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_days() {
        let mut rows = vec![row_with_days("5 Hari"), row_with_days("5 Hari"), row_with_days("-"), row_with_days("-")];
        for (i, r) in rows.iter_mut().enumerate() {
            r.fields.insert("urut", i as u64);
        }
        sort_rows(&mut rows);
        let order: Vec<String> = rows.iter().map(|r| r.cell("urut")).collect();
        assert_eq!(order, ["0", "1", "2", "3"]);
    }

    #[test]
    fn test_build_report_numbers_and_columns() {
        let today = ymd(2024, 3, 10);
        let table = build_report(
            vec![
                latest(json!({"tid": "T1", "jenis": "A", "status": "ok"}), Some(ymd(2024, 3, 1))),
                latest(json!({"tid": "T2", "jenis": "B", "merchant": "M"}), Some(ymd(2024, 1, 1))),
            ],
            &LocationMap::new(),
            today,
        );
        assert_eq!(table.rows[0].cell(COL_TID), "T2");
        assert_eq!(table.rows[0].cell(COL_NO), "1");
        assert_eq!(table.rows[1].cell(COL_NO), "2");
        assert_eq!(
            table.columns,
            ["No", "tid", "locate", "jenis", "tglRpl_terakhir", "periode_opname_hari", "merchant", "status"]
        );
    }

    #[test]
    fn test_build_report_empty() {
        let table = build_report(Vec::new(), &LocationMap::new(), ymd(2024, 1, 1));
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
