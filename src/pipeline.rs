//! Alur lengkap: fetch → reduksi record terbaru → baris laporan
//!
//! `today` selalu dari pemanggil agar hasil deterministik di test.

use crate::config::Config;
use crate::error::{RekapError, Result};
use crate::fetcher::{fetch_all, FetchNote, HistoryApi, QueryWindow};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use rekap_rpl_common::{build_report, reduce_latest, LocationMap, ReportTable, RowFilter};
use tracing::info;

/// Hasil satu kali run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Semua baris yang dipertahankan (sebelum filter)
    pub table: ReportTable,
    /// Filter tampilan; tidak mengubah `table`
    pub filter: RowFilter,
    pub errors: Vec<FetchNote>,
    pub window: QueryWindow,
    pub total_tids: usize,
    /// Jumlah record mentah sebelum reduksi
    pub fetched_records: usize,
    pub alert_days_min: i64,
}

impl RunReport {
    /// Baris yang lolos filter, nomor urut tetap
    pub fn visible(&self) -> ReportTable {
        self.filter.apply(&self.table)
    }

    /// Ada baris yang dipertahankan (filter tidak dihitung)
    pub fn has_data(&self) -> bool {
        !self.table.is_empty()
    }

    /// "Tidak ada data" sebagai error tersendiri
    pub fn require_data(&self) -> Result<()> {
        if self.has_data() {
            Ok(())
        } else {
            Err(RekapError::NoData)
        }
    }
}

pub async fn run<A: HistoryApi>(
    api: &A,
    tids: &[String],
    locations: &LocationMap,
    config: &Config,
    today: NaiveDate,
    progress: &ProgressBar,
) -> Result<RunReport> {
    config.validate()?;
    if tids.is_empty() {
        return Err(RekapError::EmptyTidList("tidak ada TID untuk diproses".into()));
    }

    let window = QueryWindow::new(config.periode_awal_date()?, today);
    info!(
        tids = tids.len(),
        concurrency = config.concurrency,
        periode_awal = %window.periode_awal,
        periode_akhir = %window.periode_akhir,
        "mulai fetch"
    );

    let outcome = fetch_all(api, tids, &window, config.concurrency, progress).await;
    let fetched_records = outcome.records.len();

    let latest = reduce_latest(outcome.records);
    let table = build_report(latest, locations, today);
    info!(
        records = fetched_records,
        rows = table.len(),
        errors = outcome.errors.len(),
        "rekap selesai"
    );

    Ok(RunReport {
        table,
        filter: RowFilter::default(),
        errors: outcome.errors,
        window,
        total_tids: tids.len(),
        fetched_records,
        alert_days_min: config.alert_days_min,
    })
}
