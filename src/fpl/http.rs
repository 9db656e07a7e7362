//! Read-only client for the two FPL endpoints the extractor needs.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    cli::types::PlayerId,
    core::http::{build_client, resolve_base_url},
    fpl::types::{BootstrapStatic, Element, ElementSummary},
    Result,
};

#[cfg(test)]
mod tests;

/// Thin wrapper around a reqwest client bound to an API root.
#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    base_url: String,
    debug: bool,
}

impl FplClient {
    /// Client for `base_url` (see [`resolve_base_url`] for the fallback order).
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Ok(Self {
            http: build_client()?,
            base_url: resolve_base_url(base_url),
            debug: false,
        })
    }

    /// Print each request URL to stderr before sending.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bootstrap_url(&self) -> String {
        format!("{}/bootstrap-static/", self.base_url)
    }

    pub fn element_summary_url(&self, player_id: PlayerId) -> String {
        format!("{}/element-summary/{}/", self.base_url, player_id)
    }

    /// `GET bootstrap-static/`
    pub async fn bootstrap_static(&self) -> Result<BootstrapStatic> {
        self.get_json(&self.bootstrap_url()).await
    }

    /// The full player roster from `bootstrap-static/`.
    pub async fn get_all_players(&self) -> Result<Vec<Element>> {
        Ok(self.bootstrap_static().await?.elements)
    }

    /// `GET element-summary/{id}/`
    pub async fn element_summary(&self, player_id: PlayerId) -> Result<ElementSummary> {
        self.get_json(&self.element_summary_url(player_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if self.debug {
            eprintln!("URL => {}", url);
        }

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
