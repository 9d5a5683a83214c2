use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Persistence is disabled when unset.
    pub database_url: Option<String>,
    /// Identity verification is disabled unless both Supabase values are set.
    pub supabase: Option<SupabaseConfig>,
    pub require_auth: bool,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let supabase = match (optional_env("SUPABASE_URL"), optional_env("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
            }),
            (None, None) => None,
            _ => bail!("SUPABASE_URL and SUPABASE_ANON_KEY must be set together"),
        };

        let require_auth = parse_bool(optional_env("REQUIRE_AUTH").as_deref())
            .context("REQUIRE_AUTH must be 'true' or 'false'")?;

        if require_auth && supabase.is_none() {
            bail!("REQUIRE_AUTH=true needs SUPABASE_URL and SUPABASE_ANON_KEY");
        }

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            database_url: optional_env("DATABASE_URL"),
            supabase,
            require_auth,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats empty values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) if v == "true" || v == "1" => Ok(true),
        Some(v) if v == "false" || v == "0" => Ok(false),
        Some(v) => bail!("unrecognized boolean '{v}'"),
    }
}
