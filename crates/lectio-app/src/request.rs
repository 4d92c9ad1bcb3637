//! Turning a requested slug into what a page route should do.
//!
//! The Portuguese route is canonical: a slug in the legacy convention is
//! answered with a permanent redirect to its canonical path. The English
//! route parses its own convention only. A missing or invalid slug on either
//! route falls back to today's date at its canonical path.

use lectio_core::types::{Locale, SlugConvention};
use lectio_liturgy::date::{CalendarDate, SlugCodec, path_for};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DateOutcome {
    /// Serve `date` at `path`.
    Serve { date: CalendarDate, path: String },
    /// Permanently redirect to `location`.
    Redirect { date: CalendarDate, location: String },
    /// The slug was missing or invalid; serve today at `path`.
    Today { date: CalendarDate, path: String },
}

impl DateOutcome {
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        match self {
            Self::Serve { date, .. } | Self::Redirect { date, .. } | Self::Today { date, .. } => {
                *date
            }
        }
    }
}

/// ## Summary
/// Decides how a route for `locale` answers a request for `slug`.
#[must_use]
pub fn resolve_request(
    codec: &SlugCodec,
    slug: Option<&str>,
    locale: Locale,
    today: CalendarDate,
) -> DateOutcome {
    let fallback = || DateOutcome::Today {
        date: today,
        path: path_for(today, locale),
    };
    let Some(slug) = slug.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback();
    };

    let outcome = match locale {
        Locale::Pt => codec.normalize_to_canonical(slug).map(|resolution| {
            let path = path_for(resolution.date, locale);
            if resolution.needs_redirect {
                DateOutcome::Redirect {
                    date: resolution.date,
                    location: path,
                }
            } else {
                DateOutcome::Serve {
                    date: resolution.date,
                    path,
                }
            }
        }),
        Locale::En => codec
            .parse(slug, SlugConvention::for_locale(locale))
            .map(|date| DateOutcome::Serve {
                date,
                path: path_for(date, locale),
            }),
    };

    outcome.unwrap_or_else(|| {
        tracing::debug!(slug, %locale, "Invalid slug, serving today");
        fallback()
    })
}
