use anyhow::{bail, Context, Result};

/// Application configuration loaded from `.env` (if present) and the
/// process environment. Fails at startup with an instructive message when
/// the API credential is missing — no generation call is attempted without it.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub banner_path: String,
    pub port: u16,
    pub rust_log: String,
}

/// Primary credential name and its legacy alias, checked in order.
const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_api_key()?,
            banner_path: std::env::var("BANNER_PATH")
                .unwrap_or_else(|_| "assets/banner.pdf.a4.png".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_api_key() -> Result<String> {
    for key in API_KEY_VARS {
        if let Ok(value) = std::env::var(key) {
            let value = value.trim().to_string();
            if !value.is_empty() {
                return Ok(value);
            }
        }
    }
    bail!(
        "Faltou a chave da API. Defina GOOGLE_API_KEY (ou o alias legado GEMINI_API_KEY) \
         no ambiente ou em um arquivo .env"
    )
}
