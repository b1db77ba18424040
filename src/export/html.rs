//! Tampilan HTML mandiri (tanpa CDN)
//!
//! Ringkasan, daftar error, tabel dengan header sticky, warna alert,
//! dan filter durasi + pencarian di sisi browser.

use crate::error::Result;
use crate::pipeline::RunReport;
use rekap_rpl_common::{day_number, ReportTable};
use rekap_rpl_common::layout::{is_alert, COL_JENIS, COL_NO, COL_PERIODE, COL_TID, DURATION_OPTIONS};
use std::fmt::Write;
use std::path::Path;

const STYLE: &str = r#"
    body { font-family: 'Segoe UI', Tahoma, sans-serif; background: #f8f9fa; color: #212529; margin: 0; padding: 16px; }
    h1 { font-size: 20px; margin: 0 0 4px 0; }
    .muted { color: #6c757d; margin-bottom: 12px; font-size: 14px; }
    .box { border-radius: 6px; padding: 10px 14px; margin-bottom: 12px; font-size: 14px; }
    .box-warning { background: #fff3cd; border: 1px solid #ffe69c; }
    .box-danger { background: #f8d7da; border: 1px solid #f1aeb5; }
    .filters { display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 12px; font-size: 14px; }
    .filters select, .filters input { padding: 4px 6px; font-size: 14px; }
    .table-wrap { max-height: 72vh; overflow: auto; border: 1px solid #ddd; border-radius: 8px; background: #fff; }
    table.rpl-table { font-size: 12px; white-space: nowrap; border-collapse: collapse; margin: 0; }
    table.rpl-table th, table.rpl-table td { padding: 4px 8px; vertical-align: middle; border: 1px solid #ddd; }
    table.rpl-table thead th { position: sticky; top: 0; background: #f8f9fa; z-index: 2; text-align: center; font-weight: 700; }
    tr.row-normal { background-color: #ffffb3; }
    tr.row-alert { background-color: #ffb3b3; }
    td.center { text-align: center; }
"#;

const SCRIPT: &str = r##"
function getHariNumber(text) {
  if (!text) return NaN;
  const m = String(text).match(/-?\d+/);
  return m ? parseInt(m[0], 10) : NaN;
}

function colIndexByName(table, name) {
  const ths = Array.from(table.querySelectorAll("thead th")).map(th => th.innerText.trim());
  return ths.findIndex(x => x === name);
}

function applyFilters() {
  const table = document.getElementById("rplTable");
  if (!table) return;
  const idxDurasi = colIndexByName(table, "periode_opname_hari");
  const minHari = document.getElementById("durasiFilter").value;
  const q = document.getElementById("globalSearch").value.trim().toLowerCase();

  document.querySelectorAll("#rplTable tbody tr").forEach(tr => {
    const tds = Array.from(tr.querySelectorAll("td"));
    const allText = tds.map(td => td.innerText.toLowerCase()).join(" ");
    const durasiText = (idxDurasi >= 0 && tds[idxDurasi]) ? tds[idxDurasi].innerText : "";
    const hari = getHariNumber(durasiText);
    const okDurasi = !minHari || (!Number.isNaN(hari) && hari >= parseInt(minHari, 10));
    const okSearch = !q || allText.includes(q);
    tr.style.display = (okDurasi && okSearch) ? "" : "none";
  });
}

document.getElementById("durasiFilter")?.addEventListener("change", applyFilters);
document.getElementById("globalSearch")?.addEventListener("input", applyFilters);
"##;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_center_column(col: &str) -> bool {
    col == COL_NO || col == COL_TID || col == COL_JENIS || col.ends_with("status")
}

fn render_summary(report: &RunReport, visible: &ReportTable) -> String {
    let mut summary = format!(
        "Periode query: {} s/d {} | Total TID: {} | Hasil (TID+Jenis): {} | Alert: &ge; {} hari",
        escape_html(&report.window.periode_awal),
        escape_html(&report.window.periode_akhir),
        report.total_tids,
        report.table.len(),
        report.alert_days_min
    );
    if report.filter.is_active() {
        let _ = write!(summary, " | Filter: {} dari {} baris", visible.len(), report.table.len());
    }
    summary
}

fn render_errors(report: &RunReport) -> String {
    if report.errors.is_empty() {
        return String::new();
    }
    let mut html = String::from(
        "<div class=\"box box-warning\">\n<b>Ada beberapa error saat ambil data:</b>\n<ul>\n",
    );
    for note in &report.errors {
        let _ = writeln!(html, "<li>{}</li>", escape_html(&note.to_string()));
    }
    html.push_str("</ul>\n</div>\n");
    html
}

fn render_filters() -> String {
    let mut options = String::from("<option value=\"\">Semua</option>");
    for days in DURATION_OPTIONS {
        let _ = write!(options, "<option value=\"{0}\">&ge; {0} Hari</option>", days);
    }
    format!(
        "<div class=\"filters\">\n\
         <label>Durasi <select id=\"durasiFilter\">{}</select></label>\n\
         <label>Search <input id=\"globalSearch\" placeholder=\"ketik tid / lokasi / jenis / status / dll\"></label>\n\
         </div>\n",
        options
    )
}

fn render_table(table: &ReportTable, alert_days_min: i64) -> String {
    let mut html = String::from("<div class=\"table-wrap\">\n<table id=\"rplTable\" class=\"rpl-table\">\n<thead>\n<tr>");
    for col in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape_html(col));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        let row_class = if is_alert(day_number(&row.cell(COL_PERIODE)), alert_days_min) {
            "row-alert"
        } else {
            "row-normal"
        };
        let _ = write!(html, "<tr class=\"{}\">", row_class);
        for col in &table.columns {
            let class = if is_center_column(col) { " class=\"center\"" } else { "" };
            let _ = write!(html, "<td{}>{}</td>", class, escape_html(&row.cell(col)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</div>\n");
    html
}

/// Render halaman lengkap
pub fn render_report(report: &RunReport) -> String {
    let visible = report.visible();
    let body = if !report.has_data() {
        "<div class=\"box box-danger\">Tidak ada data yang berhasil ditampilkan.</div>\n".to_string()
    } else if visible.is_empty() {
        format!(
            "<div class=\"box box-warning\">Tidak ada baris yang cocok dengan filter.</div>\n{}",
            render_table(&visible, report.alert_days_min)
        )
    } else {
        format!("{}{}", render_filters(), render_table(&visible, report.alert_days_min))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Rekap RPL Terakhir (Semua TID)</title>
<style>{style}</style>
</head>
<body>
<h1>Rekap RPL Terakhir (Semua TID)</h1>
<div class="muted">{summary}</div>
{errors}{body}<script>{script}</script>
</body>
</html>
"#,
        style = STYLE,
        summary = render_summary(report, &visible),
        errors = render_errors(report),
        body = body,
        script = SCRIPT,
    )
}

pub fn generate_html(report: &RunReport, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, render_report(report))?;
    Ok(())
}
