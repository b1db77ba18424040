//! Ambil record terbaru per (tid, jenis)
//!
//! Aturan penggantian untuk satu kunci:
//! - slot kosong: kandidat apa pun (termasuk tanpa tanggal) menempati slot
//! - slot terisi: kandidat mengganti hanya jika tanggalnya ada DAN
//!   (record lama tanpa tanggal ATAU tanggal kandidat lebih baru)
//!
//! Tanggal sama: record yang lebih dulu diproses tetap dipakai.

use crate::alias::pick_category;
use crate::types::{LatestRecord, NormalizedRecord};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Kunci reduksi
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReductionKey {
    pub tid: String,
    pub category: String,
}

/// Reducer streaming; urutan output = urutan pertama kali kunci muncul
#[derive(Debug, Default)]
pub struct LatestReducer {
    index: HashMap<ReductionKey, usize>,
    slots: Vec<LatestRecord>,
}

impl LatestReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Proses satu kandidat. Record dengan tid kosong diabaikan.
    pub fn push(&mut self, candidate: NormalizedRecord) {
        let tid = candidate.tid();
        if tid.is_empty() {
            return;
        }
        let category = pick_category(&candidate.record);
        let key = ReductionKey {
            tid,
            category: category.clone(),
        };

        match self.index.get(&key).copied() {
            None => {
                self.index.insert(key, self.slots.len());
                self.slots.push(LatestRecord {
                    record: candidate.record,
                    category,
                    canonical_date: candidate.canonical_date,
                });
            }
            Some(idx) => {
                let current = &mut self.slots[idx];
                if should_replace(current.canonical_date, candidate.canonical_date) {
                    current.record = candidate.record;
                    current.canonical_date = candidate.canonical_date;
                }
            }
        }
    }

    pub fn finish(self) -> Vec<LatestRecord> {
        self.slots
    }
}

fn should_replace(current: Option<NaiveDate>, candidate: Option<NaiveDate>) -> bool {
    match (current, candidate) {
        (_, None) => false,
        (None, Some(_)) => true,
        (Some(old), Some(new)) => new > old,
    }
}

/// Reduksi seluruh record sesuai urutan input
pub fn reduce_latest<I>(records: I) -> Vec<LatestRecord>
where
    I: IntoIterator<Item = NormalizedRecord>,
{
    let mut reducer = LatestReducer::new();
    for r in records {
        reducer.push(r);
    }
    reducer.finish()
}
