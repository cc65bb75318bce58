use crate::config::SupabaseSettings;
use crate::db::models::Row;
use crate::error::{BackendError, PostgrestError};
use reqwest::header::ACCEPT;
use tracing::{debug, warn};
use url::Url;

/// Path of the PostgREST interface below the project URL.
const REST_PATH: &str = "rest/v1/";

/// Thin client over the Supabase REST interface.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: Url,
    key: String,
}

impl SupabaseClient {
    pub fn new(
        http: reqwest::Client,
        project_url: &str,
        key: impl Into<String>,
    ) -> Result<Self, BackendError> {
        let mut base = Url::parse(project_url)?;
        // `Url::join` drops the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let rest_url = base.join(REST_PATH)?;
        Ok(Self {
            http,
            rest_url,
            key: key.into(),
        })
    }

    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    /// `select=*` over a whole table, rows in the order the service returns them.
    pub async fn select_all(&self, table: &str) -> Result<Vec<Row>, BackendError> {
        let url = self.rest_url.join(table)?;
        debug!(table, url = %url, "querying Supabase");

        let resp = self
            .http
            .get(url)
            .query(&[("select", "*")])
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.text().await {
                Ok(body) => PostgrestError::message_from_body(&body),
                Err(e) => format!("failed to read response body: {e}"),
            };
            return Err(BackendError::Upstream { status, message });
        }

        Ok(resp.json::<Vec<Row>>().await?)
    }
}

/// Database availability, decided once at startup.
#[derive(Clone)]
pub enum DatabaseState {
    Configured(SupabaseClient),
    Missing,
}

impl DatabaseState {
    /// Builds the client when credentials are present. An unparsable URL is
    /// logged and treated like absent credentials.
    pub fn from_settings(http: reqwest::Client, settings: SupabaseSettings) -> Self {
        match settings {
            SupabaseSettings::Configured { url, key } => {
                match SupabaseClient::new(http, &url, key) {
                    Ok(client) => DatabaseState::Configured(client),
                    Err(e) => {
                        warn!(error = %e, "invalid SUPABASE_URL; database endpoints disabled");
                        DatabaseState::Missing
                    }
                }
            }
            SupabaseSettings::Missing => {
                warn!("Supabase credentials not found in environment variables");
                DatabaseState::Missing
            }
        }
    }

    pub fn client(&self) -> Result<&SupabaseClient, BackendError> {
        match self {
            DatabaseState::Configured(client) => Ok(client),
            DatabaseState::Missing => Err(BackendError::SupabaseConfigMissing),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, DatabaseState::Configured(_))
    }
}
