use crate::error::{RekapError, Result};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rekap_rpl_common::date::parse_ymd;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Env var untuk override endpoint API
pub const API_URL_ENV: &str = "REKAP_RPL_API_URL";

const DEFAULT_API_URL: &str = "http://203.153.103.122:89/cro_terpusat/api/get_rpl_tid.php";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    /// Awal periode query (YYYY-MM-DD); akhir periode = hari ini
    pub periode_awal: String,
    /// Jumlah request paralel per batch
    pub concurrency: usize,
    pub connect_timeout_seconds: u64,
    pub timeout_seconds: u64,
    /// Batas durasi (hari) untuk baris alert
    pub alert_days_min: i64,
    pub tids_file: PathBuf,
    pub lokasi_file: PathBuf,
    /// Zona waktu untuk "hari ini" (Asia/Jakarta = +7)
    pub utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            periode_awal: "2000-01-01".into(),
            concurrency: 15,
            connect_timeout_seconds: 10,
            timeout_seconds: 30,
            alert_days_min: 60,
            tids_file: PathBuf::from("tids.txt"),
            lokasi_file: PathBuf::from("tids_lokasi.txt"),
            utc_offset_hours: 7,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        // Env var lebih prioritas dari file
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_url = url.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RekapError::Config("Direktori home tidak ditemukan".into()))?;
        Ok(home.join(".config").join("rekap-rpl").join("config.json"))
    }

    /// Validasi sebelum fetch dimulai
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(RekapError::Config("concurrency minimal 1".into()));
        }
        if self.connect_timeout_seconds == 0 || self.timeout_seconds == 0 {
            return Err(RekapError::Config("timeout harus lebih dari 0 detik".into()));
        }
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(RekapError::Config(format!("api_url tidak valid: {}", self.api_url)));
        }
        if parse_ymd(&self.periode_awal).is_none() {
            return Err(RekapError::Config(format!(
                "periode_awal harus YYYY-MM-DD: {}",
                self.periode_awal
            )));
        }
        self.offset()?;
        Ok(())
    }

    pub fn periode_awal_date(&self) -> Result<NaiveDate> {
        parse_ymd(&self.periode_awal)
            .ok_or_else(|| RekapError::Config(format!("periode_awal tidak valid: {}", self.periode_awal)))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .ok_or_else(|| RekapError::Config(format!("utc_offset_hours tidak valid: {}", self.utc_offset_hours)))
    }

    /// Waktu lokal pada zona waktu konfigurasi
    pub fn now(&self) -> Result<NaiveDateTime> {
        Ok(Utc::now().with_timezone(&self.offset()?).naive_local())
    }

    pub fn today(&self) -> Result<NaiveDate> {
        Ok(self.now()?.date())
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = url;
        self.validate()?;
        self.save()
    }

    pub fn set_concurrency(&mut self, concurrency: usize) -> Result<()> {
        self.concurrency = concurrency;
        self.validate()?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.concurrency, 15);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"concurrency": 4}"#).unwrap();
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.alert_days_min, 60);
        assert_eq!(config.periode_awal, "2000-01-01");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut c = Config::default();
        c.concurrency = 0;
        assert!(matches!(c.validate(), Err(RekapError::Config(_))));

        let mut c = Config::default();
        c.api_url = "ftp://example.com".into();
        assert!(c.validate().is_err());

        let mut c = Config::default();
        c.periode_awal = "01-01-2000".into();
        assert!(c.validate().is_err());

        let mut c = Config::default();
        c.timeout_seconds = 0;
        assert!(c.validate().is_err());

        let mut c = Config::default();
        c.utc_offset_hours = 30;
        assert!(c.validate().is_err());
    }
}
