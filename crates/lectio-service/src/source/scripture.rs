//! HTTP client for the alternate-language scripture provider.

use async_trait::async_trait;
use lectio_liturgy::text::VerseRow;
use serde::Deserialize;

use super::{ScriptureSource, parse_base_url};
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Deserialize)]
struct PassageResponse {
    #[serde(default)]
    verses: Vec<VerseRow>,
}

/// Fetches `GET <base>/<passage>?translation=<id>`.
#[derive(Debug, Clone)]
pub struct HttpScriptureSource {
    client: reqwest::Client,
    base: reqwest::Url,
    translation: String,
}

impl HttpScriptureSource {
    /// ## Errors
    /// Returns `InvalidEndpoint` if `base_url` is not an absolute http(s) URL.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        translation: impl Into<String>,
    ) -> ServiceResult<Self> {
        Ok(Self {
            client,
            base: parse_base_url(base_url)?,
            translation: translation.into(),
        })
    }

    fn url_for(&self, passage: &str) -> ServiceResult<reqwest::Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ServiceError::InvalidEndpoint(self.base.to_string()))?
            .pop_if_empty()
            .push(passage);
        url.query_pairs_mut()
            .append_pair("translation", &self.translation);
        Ok(url)
    }
}

#[async_trait]
impl ScriptureSource for HttpScriptureSource {
    #[tracing::instrument(skip(self))]
    async fn fetch_passage(&self, passage: &str) -> ServiceResult<Option<Vec<VerseRow>>> {
        let url = self.url_for(passage)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("Passage not found upstream");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ServiceError::UpstreamStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.json::<PassageResponse>().await?;
        tracing::trace!(verses = body.verses.len(), "Fetched passage");
        Ok((!body.verses.is_empty()).then_some(body.verses))
    }
}
