use clap::Parser;
use lectio_core::config::load_config;
use lectio_liturgy::calendar::{LiturgicalYear, daily_message, daily_message_for_slug};
use lectio_liturgy::date::{Navigation, SlugCodec, today};
use lectio_service::day::{DayService, assemble_day};
use lectio_service::source::RawLiturgy;
use serde_json::json;

use lectio_app::cli::{Cli, Command};
use lectio_app::error::AppError;
use lectio_app::request::resolve_request;
use lectio_app::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = telemetry::init();
    let cli = Cli::parse();

    let config = load_config()?;
    tracing::debug!(config = ?config, "Configuration loaded");
    filter.apply(&config.logging.level);

    let codec = SlugCodec::new(config.calendar.year_range()?);
    let today = today(config.calendar.timezone()?);
    let locale = cli.locale;

    let output = match cli.command {
        Command::Resolve { slug } => {
            let resolution = codec
                .normalize_to_canonical(&slug)
                .ok_or_else(|| AppError::InvalidSlug(slug.clone()))?;
            serde_json::to_value(resolution)?
        }
        Command::Day { slug, offline } => {
            let request = resolve_request(&codec, slug.as_deref(), locale, today);
            let date = request.date();

            let day = if offline {
                assemble_day(date, &RawLiturgy::default())
            } else {
                let service = DayService::from_settings(&config)?;
                match service.liturgical_day(date).await {
                    Ok(day) => day,
                    Err(error) => {
                        tracing::warn!(
                            %error,
                            %date,
                            "Liturgy provider unavailable, using calendar only"
                        );
                        assemble_day(date, &RawLiturgy::default())
                    }
                }
            };
            json!({ "request": request, "day": day })
        }
        Command::Nav { slug } => {
            let request = resolve_request(&codec, slug.as_deref(), locale, today);
            serde_json::to_value(Navigation::around(&codec, request.date(), today, locale))?
        }
        Command::Message { slug } => {
            let message = match slug {
                Some(slug) => daily_message_for_slug(&codec, &slug, locale)
                    .ok_or(AppError::InvalidSlug(slug))?,
                None => daily_message(today, locale),
            };
            println!("{message}");
            return Ok(());
        }
        Command::Year { year } => {
            let anchors =
                LiturgicalYear::for_year(year).ok_or(AppError::UnsupportedYear(year))?;
            let movable: Vec<_> = anchors
                .movable_feasts()
                .into_iter()
                .map(|(feast, date)| {
                    let name = feast.feast().name.get(locale);
                    json!({ "feast": feast, "date": date, "name": name })
                })
                .collect();
            json!({ "anchors": anchors, "movable_feasts": movable })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
