//! Filter baris laporan
//!
//! Dua filter yang bisa digabung (AND):
//! - durasi minimal (angka dari kolom periode_opname_hari)
//! - pencarian teks (case-insensitive) di seluruh sel baris

use crate::layout::COL_PERIODE;
use crate::report::{day_number, ReportTable};
use crate::types::FinalRow;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    pub min_days: Option<i64>,
    pub search: Option<String>,
}

impl RowFilter {
    pub fn new(min_days: Option<i64>, search: Option<String>) -> Self {
        let search = search
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        Self { min_days, search }
    }

    pub fn is_active(&self) -> bool {
        self.min_days.is_some() || self.search.is_some()
    }

    pub fn matches(&self, row: &FinalRow, columns: &[String]) -> bool {
        if let Some(min) = self.min_days {
            match day_number(&row.cell(COL_PERIODE)) {
                Some(days) if days >= min => {}
                _ => return false,
            }
        }

        if let Some(q) = &self.search {
            let all_text = row.cells(columns).join(" ").to_lowercase();
            if !all_text.contains(q.as_str()) {
                return false;
            }
        }

        true
    }

    /// Terapkan ke tabel; nomor urut tidak diubah
    pub fn apply(&self, table: &ReportTable) -> ReportTable {
        if !self.is_active() {
            return table.clone();
        }
        ReportTable {
            columns: table.columns.clone(),
            rows: table
                .rows
                .iter()
                .filter(|r| self.matches(r, &table.columns))
                .cloned()
                .collect(),
        }
    }
}
