//! Tipe data pipeline rekap
//!
//! - Record: mapping field → nilai mentah dari API (tanpa skema tetap)
//! - NormalizedRecord: Record + tag `tid` + tanggal kanonik
//! - LatestRecord: record terbaru per (tid, jenis)
//! - FinalRow: baris laporan siap render/export

use crate::layout::PLACEHOLDER;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Record mentah dari API. Urutan field dipertahankan sesuai respons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Nilai field sebagai teks; `null` dianggap tidak ada.
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(value_text)
    }

    /// Field ada dan bukan `null`
    pub fn is_set(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(v) if !v.is_null())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// TID record (teks kosong jika tidak ada)
    pub fn tid(&self) -> String {
        self.text("tid").unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Konversi nilai JSON ke teks tampilan
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Record setelah normalisasi respons
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub record: Record,
    /// Tanggal kanonik (None jika tidak ada / tidak bisa di-parse)
    pub canonical_date: Option<NaiveDate>,
}

impl NormalizedRecord {
    pub fn tid(&self) -> String {
        self.record.tid()
    }
}

/// Record terbaru untuk satu kunci (tid, jenis)
#[derive(Debug, Clone, PartialEq)]
pub struct LatestRecord {
    pub record: Record,
    pub category: String,
    pub canonical_date: Option<NaiveDate>,
}

/// Baris laporan akhir
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalRow {
    pub fields: Record,
}

impl FinalRow {
    /// Teks sel untuk kolom; "-" jika field tidak ada
    pub fn cell(&self, column: &str) -> String {
        self.fields
            .text(column)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Semua sel sesuai urutan kolom
    pub fn cells(&self, columns: &[String]) -> Vec<String> {
        columns.iter().map(|c| self.cell(c)).collect()
    }
}

/// Peta TID → lokasi (dibangun sekali sebelum fetch, read-only)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationMap(HashMap<String, String>);

impl LocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tid: impl Into<String>, location: impl Into<String>) {
        self.0.insert(tid.into(), location.into());
    }

    /// Lokasi untuk TID, hanya jika tidak kosong
    pub fn get(&self, tid: &str) -> Option<&str> {
        self.0
            .get(tid)
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
