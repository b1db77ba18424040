//! Penulis laporan (buffer, tanpa I/O file)

pub mod csv_core;
#[cfg(feature = "excel")]
pub mod excel_core;
