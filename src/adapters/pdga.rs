use crate::adapters::profile_page::ProfilePage;
use crate::core::{ConfigProvider, PdgaNumber, Profile, ProfileSource};
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub const DEFAULT_BASE_URL: &str = "https://www.pdga.com/player/";

/// Fetches player pages over HTTP and scrapes them with [`ProfilePage`].
pub struct PdgaProfileFetcher {
    client: Client,
    base_url: String,
}

impl PdgaProfileFetcher {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| BotError::ConfigError {
                message: format!("could not build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn profile_url(&self, pdga_number: &PdgaNumber) -> String {
        format!("{}/{}", self.base_url, pdga_number)
    }
}

#[async_trait]
impl ProfileSource for PdgaProfileFetcher {
    async fn fetch(&self, pdga_number: PdgaNumber) -> Result<Profile> {
        let url = self.profile_url(&pdga_number);
        tracing::debug!("Making profile request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Profile response status: {}", status);

        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(BotError::SubjectNotFound {
                    id: pdga_number.to_string(),
                });
            }
            other => {
                return Err(BotError::FetchFailed {
                    status: Some(other.as_u16()),
                    message: format!(
                        "status code error: {} {}",
                        other.as_u16(),
                        other.canonical_reason().unwrap_or("Unknown")
                    ),
                });
            }
        }

        let html = response.text().await?;
        tracing::debug!("Received {} bytes of profile markup", html.len());

        // Html 不是 Send，解析放在最後一個 await 之後
        ProfilePage::parse(&html).into_profile(pdga_number)
    }
}
