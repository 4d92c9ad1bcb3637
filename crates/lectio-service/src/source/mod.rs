//! Collaborators the engine reads from.
//!
//! The liturgy source supplies the raw Portuguese record of a day; the
//! scripture source supplies verse rows in the alternate language.

mod liturgy;
mod raw;
mod scripture;

use async_trait::async_trait;
use lectio_liturgy::date::CalendarDate;
use lectio_liturgy::text::VerseRow;

use crate::error::{ServiceError, ServiceResult};

pub use liturgy::HttpLiturgySource;
pub use raw::{RawAntiphons, RawLiturgy, RawReading, RawReadings};
pub use scripture::HttpScriptureSource;

/// Supplies the raw liturgy record of a date.
#[async_trait]
pub trait LiturgySource: Send + Sync {
    /// ## Errors
    /// Transport failures and non-success upstream statuses. Missing fields
    /// in the record are not errors.
    async fn fetch_liturgy(&self, date: CalendarDate) -> ServiceResult<RawLiturgy>;
}

/// Supplies alternate-language verse rows for a provider passage.
#[async_trait]
pub trait ScriptureSource: Send + Sync {
    /// Returns `Ok(None)` when the provider has no text for `passage`.
    ///
    /// ## Errors
    /// Transport failures and non-success upstream statuses.
    async fn fetch_passage(&self, passage: &str) -> ServiceResult<Option<Vec<VerseRow>>>;
}

/// Parses a configured base URL, making sure its path ends in `/`.
fn parse_base_url(raw: &str) -> ServiceResult<reqwest::Url> {
    let mut url = reqwest::Url::parse(raw)
        .map_err(|e| ServiceError::InvalidEndpoint(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ServiceError::InvalidEndpoint(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
