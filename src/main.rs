use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rekap_rpl::{cli, config, export, fetcher, pipeline, source};
use rekap_rpl_common::RowFilter;
use cli::{Cli, Commands};
use config::Config;
use fetcher::HttpHistoryClient;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn batch_progress(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("  [{bar:30}] {pos}/{len} TID ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    bar
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut config = Config::load().context("gagal memuat konfigurasi")?;

    match cli.command {
        Commands::Run {
            tids,
            lokasi,
            output,
            format,
            concurrency,
            api_url,
            periode_awal,
            min_days,
            search,
            alert_days,
        } => {
            println!("📊 rekap-rpl - Rekap RPL Terakhir\n");

            // Override dari CLI hanya untuk run ini
            if let Some(c) = concurrency {
                config.concurrency = c;
            }
            if let Some(url) = api_url {
                config.api_url = url;
            }
            if let Some(p) = periode_awal {
                config.periode_awal = p;
            }
            if let Some(a) = alert_days {
                config.alert_days_min = a;
            }
            config.validate()?;

            // 1. Sumber
            println!("[1/4] Membaca daftar TID...");
            let tids_path = tids.unwrap_or_else(|| config.tids_file.clone());
            let lokasi_path = lokasi.unwrap_or_else(|| config.lokasi_file.clone());
            let tid_list = source::load_tids(&tids_path)?;
            let locations = source::load_location_map(&lokasi_path)?;
            println!("✔ {} TID, {} lokasi\n", tid_list.len(), locations.len());

            // 2. Fetch + rekap
            let now = config.now()?;
            let today = now.date();
            println!(
                "[2/4] Ambil riwayat ({} paralel, periode {} s/d {})...",
                config.concurrency,
                config.periode_awal,
                today.format("%Y-%m-%d")
            );
            let client = HttpHistoryClient::from_config(&config)?;
            let progress = batch_progress(tid_list.len());
            let mut report = pipeline::run(&client, &tid_list, &locations, &config, today, &progress).await?;
            progress.finish_and_clear();
            println!(
                "✔ {} record dari {} TID, {} error\n",
                report.fetched_records,
                report.total_tids,
                report.errors.len()
            );

            // 3. Filter
            report.filter = RowFilter::new(min_days, search);
            if report.filter.is_active() {
                println!("[3/4] Filter baris...");
                println!("✔ {} dari {} baris\n", report.visible().len(), report.table.len());
            } else {
                println!("[3/4] Tanpa filter\n");
            }

            println!(
                "Hasil (TID+Jenis): {} | Alert: ≥ {} hari",
                report.table.len(),
                report.alert_days_min
            );
            if !report.errors.is_empty() {
                println!("Ada beberapa error saat ambil data:");
                for note in &report.errors {
                    println!("  - {}", note);
                }
            }
            println!();

            // 4. Export
            println!("[4/4] Export...");
            export::export_report(&report, &format, &output, now)?;

            report.require_data()?;
            println!("\n✅ Selesai");
        }

        Commands::Config { set_api_url, set_concurrency, show } => {
            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ api_url disimpan");
            }

            if let Some(c) = set_concurrency {
                config.set_concurrency(c)?;
                println!("✔ concurrency disimpan");
            }

            if show {
                println!("Konfigurasi ({}):", Config::config_path()?.display());
                println!("  api_url: {}", config.api_url);
                println!("  periode_awal: {}", config.periode_awal);
                println!("  concurrency: {}", config.concurrency);
                println!(
                    "  timeout: connect {}s, total {}s",
                    config.connect_timeout_seconds, config.timeout_seconds
                );
                println!("  alert_days_min: {}", config.alert_days_min);
                println!("  tids_file: {}", config.tids_file.display());
                println!("  lokasi_file: {}", config.lokasi_file.display());
                println!("  utc_offset_hours: {}", config.utc_offset_hours);
            }
        }
    }

    Ok(())
}
