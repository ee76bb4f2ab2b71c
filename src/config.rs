use anyhow::Context;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    /// Ordering page the table QR codes point at; `table=<id>` is appended.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderConfig {
    /// Accepted `payment_method` values, lowercase.
    pub payment_methods: Vec<String>,
    /// Allowed drift between the client total and the recomputed one.
    pub total_tolerance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub qr: QrConfig,
    pub orders: OrderConfig,
}

fn is_valid_base_url(url: &str) -> bool {
    lazy_static! {
        static ref BASE_URL_RE: Regex = Regex::new(r"^https?://\S+$").unwrap();
    }
    BASE_URL_RE.is_match(url)
}

fn parse_payment_methods(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("APP_PORT")
            .map(|v| v.parse::<u16>())
            .transpose()
            .context("APP_PORT must be a port number")?
            .unwrap_or(8000);

        let base_url = lookup("QR_BASE_URL").unwrap_or_else(|| "http://localhost:8000/".into());
        anyhow::ensure!(
            is_valid_base_url(&base_url),
            "QR_BASE_URL must be an http(s) url, got {base_url:?}"
        );

        let payment_methods = parse_payment_methods(
            &lookup("PAYMENT_METHODS").unwrap_or_else(|| "online,counter".into()),
        );
        anyhow::ensure!(
            !payment_methods.is_empty(),
            "PAYMENT_METHODS must name at least one method"
        );

        let total_tolerance = lookup("ORDER_TOTAL_TOLERANCE")
            .map(|v| v.trim().parse::<f64>())
            .transpose()
            .context("ORDER_TOTAL_TOLERANCE must be a number")?
            .unwrap_or(0.01);
        anyhow::ensure!(
            total_tolerance.is_finite() && total_tolerance >= 0.0,
            "ORDER_TOTAL_TOLERANCE must be a finite, non-negative number, got {total_tolerance}"
        );

        Ok(Self {
            host,
            port,
            qr: QrConfig { base_url },
            orders: OrderConfig {
                payment_methods,
                total_tolerance,
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            qr: QrConfig {
                base_url: "http://localhost:8000/".into(),
            },
            orders: OrderConfig {
                payment_methods: vec!["online".into(), "counter".into()],
                total_tolerance: 0.01,
            },
        }
    }
}
