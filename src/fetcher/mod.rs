//! Fetch riwayat RPL per TID
//!
//! Request dikelompokkan per batch berukuran `concurrency`. Semua request
//! dalam satu batch berjalan paralel; batch berikutnya baru dimulai setelah
//! seluruh request batch sebelumnya selesai (sukses, error, atau timeout).
//!
//! Hasil tiap request disimpan lokal lalu digabung setelah batch selesai,
//! urut sesuai daftar TID (bukan urutan selesai).

mod http_client;

pub use http_client::HttpHistoryClient;

use futures::future::join_all;
use indicatif::ProgressBar;
use rekap_rpl_common::date::format_ymd;
use rekap_rpl_common::{normalize_payload, NormalizedRecord};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Periode query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryWindow {
    pub periode_awal: String,
    pub periode_akhir: String,
}

impl QueryWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            periode_awal: format_ymd(start),
            periode_akhir: format_ymd(end),
        }
    }
}

/// Kegagalan satu request; teksnya dipakai sebagai catatan error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("response kosong / gagal.")]
    EmptyResponse,

    #[error("response kosong / gagal ({0}).")]
    Transport(String),

    #[error("timeout ({0}).")]
    Timeout(String),

    #[error("HTTP {0}.")]
    Status(u16),

    #[error("gagal parsing JSON.")]
    InvalidJson,
}

/// Catatan error per TID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchNote {
    pub tid: String,
    pub error: FetchError,
}

impl std::fmt::Display for FetchNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TID {}: {}", self.tid, self.error)
    }
}

/// Sumber riwayat (endpoint HTTP, atau stub di test)
pub trait HistoryApi {
    fn fetch_history(
        &self,
        tid: &str,
        window: &QueryWindow,
    ) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Hasil fetch seluruh TID
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub records: Vec<NormalizedRecord>,
    pub errors: Vec<FetchNote>,
    /// Jumlah TID dengan respons valid
    pub succeeded: usize,
}

pub async fn fetch_all<A: HistoryApi>(
    api: &A,
    tids: &[String],
    window: &QueryWindow,
    concurrency: usize,
    progress: &ProgressBar,
) -> FetchOutcome {
    let batch_size = concurrency.max(1);
    let mut outcome = FetchOutcome::default();

    for (batch_idx, batch) in tids.chunks(batch_size).enumerate() {
        info!(batch = batch_idx + 1, size = batch.len(), "mulai batch");

        let results = join_all(batch.iter().map(|tid| async move {
            let result = api.fetch_history(tid, window).await;
            (tid.as_str(), result)
        }))
        .await;

        for (tid, result) in results {
            match result {
                Ok(payload) => {
                    let rows = normalize_payload(&payload, tid);
                    debug!(tid, records = rows.len(), "respons diterima");
                    outcome.records.extend(rows);
                    outcome.succeeded += 1;
                }
                Err(error) => {
                    warn!(tid, %error, "fetch gagal");
                    outcome.errors.push(FetchNote {
                        tid: tid.to_string(),
                        error,
                    });
                }
            }
        }

        progress.inc(batch.len() as u64);
    }

    outcome
}
