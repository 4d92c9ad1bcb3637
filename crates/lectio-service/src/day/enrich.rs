//! Alternate-language enrichment of reading items.

use std::time::Duration;

use lectio_liturgy::scripture::translate;
use lectio_liturgy::text::{join_provider_verse_rows, to_semantic_html};

use super::model::{AlternateText, Readings};
use crate::bounded::map_with_limit;
use crate::error::ServiceError;
use crate::source::ScriptureSource;

/// ## Summary
/// Attaches alternate-language text to every reading item that can get one.
///
/// Each reference is translated to the provider's passage syntax and
/// fetched through [`map_with_limit`], with at most `limit` calls in flight
/// and `timeout` applied to each call. An item whose reference does not
/// translate, or whose fetch fails, times out or returns nothing, keeps
/// `alternate: None`; the other items are unaffected.
pub async fn enrich_readings(
    readings: &mut Readings,
    source: &dyn ScriptureSource,
    limit: usize,
    timeout: Duration,
) {
    let passages: Vec<Option<String>> = readings
        .items()
        .map(|item| {
            let passage = translate(&item.reference);
            if passage.is_none() && !item.reference.is_empty() {
                tracing::debug!(reference = %item.reference, "Reference not translatable");
            }
            passage
        })
        .collect();

    let fetched = map_with_limit(&passages, limit, |passage| {
        fetch_alternate(source, passage.as_deref(), timeout)
    })
    .await;

    let mut attached = 0_usize;
    for (item, alternate) in readings.items_mut().zip(fetched) {
        attached += usize::from(alternate.is_some());
        item.alternate = alternate;
    }
    tracing::debug!(attached, total = passages.len(), "Readings enriched");
}

async fn fetch_alternate(
    source: &dyn ScriptureSource,
    passage: Option<&str>,
    timeout: Duration,
) -> Option<AlternateText> {
    let passage = passage?;
    let outcome = tokio::time::timeout(timeout, source.fetch_passage(passage))
        .await
        .unwrap_or(Err(ServiceError::Timeout(timeout)));

    match outcome {
        Ok(Some(rows)) => {
            let plain_text = join_provider_verse_rows(&rows);
            if plain_text.is_empty() {
                return None;
            }
            Some(AlternateText {
                passage: passage.to_string(),
                html: to_semantic_html(&plain_text),
                plain_text,
            })
        }
        Ok(None) => {
            tracing::debug!(passage, "No alternate text available");
            None
        }
        Err(error) => {
            tracing::warn!(passage, %error, "Alternate text unavailable, keeping source text only");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use lectio_liturgy::text::VerseRow;

    use super::*;
    use crate::day::model::ReadingItem;
    use crate::error::ServiceResult;

    /// Canned responses keyed by passage; unknown passages fail.
    struct CannedScripture {
        passages: HashMap<&'static str, Option<Vec<VerseRow>>>,
        delay: Duration,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ScriptureSource for CannedScripture {
        async fn fetch_passage(&self, passage: &str) -> ServiceResult<Option<Vec<VerseRow>>> {
            self.requested
                .lock()
                .expect("lock")
                .push(passage.to_string());
            tokio::time::sleep(self.delay).await;
            self.passages.get(passage).cloned().ok_or_else(|| {
                ServiceError::InvalidEndpoint(format!("no canned passage for {passage}"))
            })
        }
    }

    fn item(reference: &str) -> ReadingItem {
        ReadingItem {
            reference: reference.to_string(),
            title: None,
            refrain: None,
            plain_text: String::new(),
            html: String::new(),
            alternate: None,
        }
    }

    fn readings() -> Readings {
        Readings {
            first_reading: vec![item("At 10,34a.37-43")],
            psalm: vec![item("Sl 117(118),1-2.16-17.22-23")],
            second_reading: vec![item("Cl 3,1-4"), item("Xy 1,1")],
            gospel: vec![item("Jo 20,1-9")],
        }
    }

    fn canned(delay: Duration) -> CannedScripture {
        CannedScripture {
            passages: HashMap::from([
                (
                    "Acts 10:34,37-43",
                    Some(vec![VerseRow::new(10, 34, "Peter opened his mouth")]),
                ),
                ("Psalms 118:1-2,16-17,22-23", None),
                (
                    "John 20:1-9",
                    Some(vec![
                        VerseRow::new(20, 1, "Now on the first day of the week"),
                        VerseRow::new(20, 2, "Therefore she ran"),
                    ]),
                ),
            ]),
            delay,
            requested: Mutex::new(Vec::new()),
        }
    }

    #[test_log::test(tokio::test)]
    async fn each_item_degrades_independently() {
        let source = canned(Duration::from_millis(1));
        let mut readings = readings();
        enrich_readings(&mut readings, &source, 2, Duration::from_secs(5)).await;

        let acts = readings.first_reading[0]
            .alternate
            .as_ref()
            .expect("acts text");
        assert_eq!(acts.passage, "Acts 10:34,37-43");
        assert_eq!(acts.plain_text, "34 Peter opened his mouth");

        // Provider had no text.
        assert_eq!(readings.psalm[0].alternate, None);
        // Provider failed.
        assert_eq!(readings.second_reading[0].alternate, None);
        // Unknown book, never requested.
        assert_eq!(readings.second_reading[1].alternate, None);

        let john = readings.gospel[0].alternate.as_ref().expect("john text");
        assert_eq!(
            john.plain_text,
            "1 Now on the first day of the week 2 Therefore she ran"
        );
        assert!(john.html.contains("<sup class=\"lectio-verse\">2</sup>"));

        let requested = source.requested.lock().expect("lock");
        assert_eq!(requested.len(), 4);
        assert!(!requested.iter().any(|p| p.starts_with("Xy")));
    }

    #[test_log::test(tokio::test)]
    async fn slow_calls_time_out_to_none() {
        let source = canned(Duration::from_millis(500));
        let mut readings = readings();
        enrich_readings(&mut readings, &source, 4, Duration::from_millis(20)).await;
        assert!(readings.items().all(|item| item.alternate.is_none()));
    }
}
