//! CSV laporan
//!
//! Header = urutan kolom, sel kosong diisi "-".

use crate::error::{Error, Result};
use crate::report::ReportTable;

pub fn generate_csv_buffer(table: &ReportTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if !table.columns.is_empty() {
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(row.cells(&table.columns))?;
        }
    }

    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinalRow, Record};

    fn table() -> ReportTable {
        let mut a = Record::new();
        a.insert("tid", "T1");
        a.insert("locate", "Jl. Sudirman, Jakarta");
        let mut b = Record::new();
        b.insert("tid", "T2");
        b.insert("catatan", "kata \"kutip\"");
        ReportTable {
            columns: vec!["tid".into(), "locate".into(), "catatan".into()],
            rows: vec![FinalRow { fields: a }, FinalRow { fields: b }],
        }
    }

    #[test]
    fn test_csv_roundtrip_columns_and_placeholders() {
        let buffer = generate_csv_buffer(&table()).unwrap();
        let mut reader = csv::Reader::from_reader(buffer.as_slice());

        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["tid", "locate", "catatan"]);

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(rows[0], ["T1", "Jl. Sudirman, Jakarta", "-"]);
        assert_eq!(rows[1], ["T2", "-", "kata \"kutip\""]);
    }

    #[test]
    fn test_csv_empty_table() {
        let buffer = generate_csv_buffer(&ReportTable::default()).unwrap();
        assert!(buffer.is_empty());
    }
}
