use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Environment keys recognised by [`Config::figment`]. Matched case-insensitively.
const ENV_KEYS: [&str; 5] = [
    "listen_addr",
    "loglevel",
    "supabase_url",
    "supabase_key",
    "gemini_api_key",
];

/// Process configuration, assembled once at startup.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub loglevel: String,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            supabase_url: None,
            supabase_key: None,
            gemini_api_key: None,
        }
    }
}

/// Outcome of the database credential presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupabaseSettings {
    Configured { url: String, key: String },
    Missing,
}

impl Config {
    /// Defaults overlaid with `SUPABASE_URL`, `SUPABASE_KEY`, `GEMINI_API_KEY`,
    /// `LISTEN_ADDR` and `LOGLEVEL` from the environment.
    ///
    /// Values are merged verbatim as strings: a key such as `012345` or
    /// `[abc` must not be reinterpreted as a number or an array.
    pub fn figment() -> Figment {
        Env::raw().only(&ENV_KEYS).iter().fold(
            Figment::from(Serialized::defaults(Config::default())),
            |figment, (key, value)| figment.merge(Serialized::default(key.as_str(), value)),
        )
    }

    pub fn from_env() -> Result<Self, figment::Error> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    /// Database credentials, or `Missing` when either one is absent or blank.
    pub fn supabase(&self) -> SupabaseSettings {
        match (present(&self.supabase_url), present(&self.supabase_key)) {
            (Some(url), Some(key)) => SupabaseSettings::Configured {
                url: url.to_string(),
                key: key.to_string(),
            },
            _ => SupabaseSettings::Missing,
        }
    }

    pub fn gemini_key(&self) -> Option<&str> {
        present(&self.gemini_api_key)
    }
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("loglevel", &self.loglevel)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &self.supabase_key.as_ref().map(|_| "<redacted>"))
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
