use crate::domain::model::{PdgaNumber, Profile};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn trigger(&self) -> &str;
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

/// Where player profiles come from.
///
/// Implementations either return a complete [`Profile`] or an error, never a partial one.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, pdga_number: PdgaNumber) -> Result<Profile>;
}
