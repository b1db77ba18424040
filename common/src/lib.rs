//! Rekap RPL Common Library
//!
//! Logika murni (tanpa jaringan) yang dipakai CLI dan test:
//! normalisasi respons, reduksi record terbaru, pembentukan laporan,
//! filter, dan penulis Excel/CSV.

pub mod types;
pub mod layout;
pub mod alias;
pub mod date;
pub mod error;
pub mod normalize;
pub mod latest;
pub mod report;
pub mod filter;
pub mod sources;
pub mod export;

pub use types::{FinalRow, LatestRecord, LocationMap, NormalizedRecord, Record};
pub use error::{Error, Result};
pub use normalize::{extract_rows, normalize_payload};
pub use latest::{reduce_latest, LatestReducer, ReductionKey};
pub use report::{build_report, column_order, day_number, ReportTable};
pub use filter::RowFilter;
pub use sources::{parse_location_map, parse_tid_list};
