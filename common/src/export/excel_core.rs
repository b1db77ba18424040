//! Excel laporan (rust_xlsxwriter)
//!
//! Satu sheet: header tebal dan dibekukan, autofilter, baris kuning
//! (normal) atau merah muda (alert).

use crate::layout::{is_alert, COL_PERIODE, HEADER_RGB, ROW_ALERT_RGB, ROW_NORMAL_RGB, SHEET_NAME};
use crate::report::{day_number, ReportTable};
use rust_xlsxwriter::*;

const BORDER_RGB: u32 = 0xDDDDDD;

/// Generate xlsx ke buffer
///
/// # Arguments
/// * `table` - baris dan urutan kolom
/// * `alert_days_min` - batas durasi untuk warna alert
pub fn generate_report_buffer(table: &ReportTable, alert_days_min: i64) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(HEADER_RGB))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_RGB));

    let normal_format = Format::new()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(ROW_NORMAL_RGB))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_RGB));

    let alert_format = Format::new()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(ROW_ALERT_RGB))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_RGB));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("Gagal set nama sheet: {}", e))?;

    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(|e| format!("Gagal tulis header: {}", e))?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let row_num = (i + 1) as u32;
        let format = if is_alert(day_number(&row.cell(COL_PERIODE)), alert_days_min) {
            &alert_format
        } else {
            &normal_format
        };

        for (col, value) in row.cells(&table.columns).iter().enumerate() {
            worksheet
                .write_string_with_format(row_num, col as u16, value, format)
                .map_err(|e| format!("Gagal tulis sel: {}", e))?;
        }
    }

    if !table.columns.is_empty() {
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(|e| format!("Gagal freeze header: {}", e))?;
        worksheet
            .autofilter(0, 0, table.rows.len() as u32, (table.columns.len() - 1) as u16)
            .map_err(|e| format!("Gagal set autofilter: {}", e))?;
        worksheet.autofit();
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Gagal simpan Excel: {}", e))
}
