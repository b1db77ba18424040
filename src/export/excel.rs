//! Excel laporan (rust_xlsxwriter via rekap-rpl-common)

use crate::error::{RekapError, Result};
use rekap_rpl_common::export::excel_core::generate_report_buffer;
use rekap_rpl_common::ReportTable;
use std::path::Path;

pub fn generate_excel(table: &ReportTable, output_path: &Path, alert_days_min: i64) -> Result<()> {
    let buffer = generate_report_buffer(table, alert_days_min).map_err(RekapError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
