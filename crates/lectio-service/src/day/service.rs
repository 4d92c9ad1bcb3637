//! Fetch, assemble and enrich one day.

use std::sync::Arc;
use std::time::Duration;

use lectio_core::config::Settings;
use lectio_liturgy::date::CalendarDate;

use super::assemble::assemble_day;
use super::enrich::enrich_readings;
use super::model::LiturgicalDay;
use crate::error::ServiceResult;
use crate::source::{HttpLiturgySource, HttpScriptureSource, LiturgySource, ScriptureSource};

const USER_AGENT: &str = concat!("lectio/", env!("CARGO_PKG_VERSION"));

struct Enrichment {
    source: Arc<dyn ScriptureSource>,
    concurrency: usize,
    timeout: Duration,
}

/// Builds [`LiturgicalDay`] records from the configured collaborators.
pub struct DayService {
    liturgy: Arc<dyn LiturgySource>,
    enrichment: Option<Enrichment>,
}

impl DayService {
    /// A service without alternate-language enrichment.
    #[must_use]
    pub fn new(liturgy: Arc<dyn LiturgySource>) -> Self {
        Self {
            liturgy,
            enrichment: None,
        }
    }

    /// Enables enrichment through `source` with at most `concurrency` calls
    /// in flight per day and `timeout` per call.
    #[must_use]
    pub fn with_scripture(
        mut self,
        source: Arc<dyn ScriptureSource>,
        concurrency: usize,
        timeout: Duration,
    ) -> Self {
        self.enrichment = Some(Enrichment {
            source,
            concurrency,
            timeout,
        });
        self
    }

    /// ## Summary
    /// Builds the HTTP collaborators named in `settings`.
    ///
    /// ## Errors
    /// Returns an error if the HTTP client cannot be built or an endpoint
    /// URL is unusable.
    pub fn from_settings(settings: &Settings) -> ServiceResult<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        let liturgy = HttpLiturgySource::new(client.clone(), &settings.liturgy_source.url)?;
        let service = Self::new(Arc::new(liturgy));

        if !settings.scripture.enabled {
            tracing::debug!("Scripture enrichment disabled");
            return Ok(service);
        }

        let scripture = HttpScriptureSource::new(
            client,
            &settings.scripture.url,
            settings.scripture.translation.clone(),
        )?;
        Ok(service.with_scripture(
            Arc::new(scripture),
            settings.scripture.concurrency(),
            settings.scripture.timeout(),
        ))
    }

    #[must_use]
    pub const fn enrichment_enabled(&self) -> bool {
        self.enrichment.is_some()
    }

    /// ## Summary
    /// Fetches the raw record for `date`, assembles the day and, when
    /// enabled, enriches its readings.
    ///
    /// ## Errors
    /// Returns an error only if the liturgy record cannot be fetched.
    /// Enrichment failures degrade per item and never fail the day.
    #[tracing::instrument(skip(self))]
    pub async fn liturgical_day(&self, date: CalendarDate) -> ServiceResult<LiturgicalDay> {
        let raw = self.liturgy.fetch_liturgy(date).await?;
        let mut day = assemble_day(date, &raw);

        if let Some(enrichment) = &self.enrichment {
            enrich_readings(
                &mut day.readings,
                enrichment.source.as_ref(),
                enrichment.concurrency,
                enrichment.timeout,
            )
            .await;
        }

        tracing::info!(
            celebration = %day.celebration,
            season = ?day.season,
            readings = day.readings.len(),
            "Liturgical day assembled"
        );
        Ok(day)
    }
}
