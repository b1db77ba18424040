use crate::error::Result;
use rekap_rpl_common::export::csv_core::generate_csv_buffer;
use rekap_rpl_common::ReportTable;
use std::path::Path;

pub fn generate_csv(table: &ReportTable, output_path: &Path) -> Result<()> {
    let buffer = generate_csv_buffer(table)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
