//! HTTP client for the liturgy provider.

use async_trait::async_trait;
use lectio_liturgy::date::CalendarDate;

use super::{LiturgySource, RawLiturgy, parse_base_url};
use crate::error::{ServiceError, ServiceResult};

/// Fetches `GET <base>?dia=DD&mes=MM&ano=YYYY`.
#[derive(Debug, Clone)]
pub struct HttpLiturgySource {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl HttpLiturgySource {
    /// ## Errors
    /// Returns `InvalidEndpoint` if `base_url` is not an absolute http(s) URL.
    pub fn new(client: reqwest::Client, base_url: &str) -> ServiceResult<Self> {
        Ok(Self {
            client,
            base: parse_base_url(base_url)?,
        })
    }

    fn url_for(&self, date: CalendarDate) -> reqwest::Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("dia", &format!("{:02}", date.day()))
            .append_pair("mes", &format!("{:02}", date.month()))
            .append_pair("ano", &format!("{:04}", date.year()));
        url
    }
}

#[async_trait]
impl LiturgySource for HttpLiturgySource {
    #[tracing::instrument(skip(self))]
    async fn fetch_liturgy(&self, date: CalendarDate) -> ServiceResult<RawLiturgy> {
        let url = self.url_for(date);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UpstreamStatus {
                status,
                url: url.to_string(),
            });
        }

        let raw = response.json::<RawLiturgy>().await?;
        tracing::debug!(
            celebration = raw.celebration.as_deref(),
            readings = raw.readings.first_reading.len()
                + raw.readings.psalm.len()
                + raw.readings.second_reading.len()
                + raw.readings.gospel.len(),
            "Fetched liturgy record"
        );
        Ok(raw)
    }
}
