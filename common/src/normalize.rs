//! Normalisasi respons API
//!
//! Bentuk payload bervariasi. Urutan ekstraksi daftar record:
//! 1. object dengan field `data` berupa array
//! 2. payload berupa array of object
//! 3. selain itu: kosong

use crate::alias::pick_date_value;
use crate::date::canonical_date;
use crate::types::{NormalizedRecord, Record};
use serde_json::Value;

/// Ambil daftar record mentah dari payload
pub fn extract_rows(payload: &Value) -> Vec<Record> {
    let items = match payload {
        Value::Object(obj) => match obj.get("data") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => items,
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(Record::from(map.clone())),
            _ => None,
        })
        .collect()
}

/// Beri tag `tid` dan tanggal kanonik pada setiap record
pub fn normalize_payload(payload: &Value, tid: &str) -> Vec<NormalizedRecord> {
    extract_rows(payload)
        .into_iter()
        .map(|record| normalize_record(record, tid))
        .collect()
}

/// Normalisasi satu record. `tid` hanya diisi jika tidak ada (atau null).
pub fn normalize_record(mut record: Record, tid: &str) -> NormalizedRecord {
    if !record.is_set("tid") {
        record.insert("tid", tid);
    }
    let canonical_date = canonical_date(pick_date_value(&record).as_deref());
    NormalizedRecord {
        record,
        canonical_date,
    }
}
