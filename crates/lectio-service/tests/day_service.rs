//! `DayService` against mock liturgy and scripture providers.

use std::sync::Arc;
use std::time::Duration;

use lectio_liturgy::calendar::{LiturgicalColor, LiturgicalSeason};
use lectio_liturgy::date::CalendarDate;
use lectio_service::day::DayService;
use lectio_service::error::ServiceError;
use lectio_service::source::{HttpLiturgySource, HttpScriptureSource};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn easter_2026() -> CalendarDate {
    CalendarDate::from_ymd(2026, 4, 5).expect("valid date")
}

async fn liturgy_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("dia", "05"))
        .and(query_param("mes", "04"))
        .and(query_param("ano", "2026"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "liturgia": "Domingo de Páscoa da Ressurreição do Senhor",
            "cor": "Branco",
            "leituras": {
                "primeiraLeitura": [{
                    "referencia": "At 10,34a.37-43",
                    "titulo": "Leitura dos Atos dos Apóstolos",
                    "texto": "34 Naqueles dias, Pedro tomou a palavra."
                }],
                "salmo": [{
                    "referencia": "Sl 117(118)",
                    "refrao": "Este é o dia que o Senhor fez para nós.",
                    "texto": "Dai graças ao Senhor, porque ele é bom!"
                }],
                "segundaLeitura": [],
                "evangelho": [{
                    "referencia": "Jo 20,1-9",
                    "texto": "1 No primeiro dia da semana, Maria Madalena foi ao túmulo."
                }]
            },
            "antifonas": { "entrada": "Ressuscitei, e estou sempre contigo." }
        })))
        .mount(&server)
        .await;
    server
}

fn liturgy_source(server: &MockServer) -> Arc<HttpLiturgySource> {
    Arc::new(HttpLiturgySource::new(reqwest::Client::new(), &server.uri()).expect("liturgy source"))
}

fn scripture_source(server: &MockServer) -> Arc<HttpScriptureSource> {
    Arc::new(
        HttpScriptureSource::new(reqwest::Client::new(), &server.uri(), "web")
            .expect("scripture source"),
    )
}

#[test_log::test(tokio::test)]
async fn assembles_and_enriches_a_day() {
    let liturgy = liturgy_server().await;
    let scripture = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("translation", "web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "verses": [
                { "chapter": 20, "verse": 1, "text": "Now on the first day of the week" },
                { "chapter": 20, "verse": 2, "text": "Therefore she ran" }
            ]
        })))
        .expect(3)
        .mount(&scripture)
        .await;

    let service = DayService::new(liturgy_source(&liturgy)).with_scripture(
        scripture_source(&scripture),
        2,
        Duration::from_secs(5),
    );
    let day = service.liturgical_day(easter_2026()).await.expect("day");

    assert_eq!(day.slug, "05-04-2026");
    assert_eq!(day.season, LiturgicalSeason::Easter);
    assert_eq!(day.color, LiturgicalColor::White);
    assert_eq!(day.readings.len(), 3);

    let passages: Vec<_> = day
        .readings
        .items()
        .map(|item| item.alternate.as_ref().map(|alt| alt.passage.as_str()))
        .collect();
    assert_eq!(
        passages,
        [
            Some("Acts 10:34,37-43"),
            Some("Psalms 118"),
            Some("John 20:1-9"),
        ]
    );

    let gospel = &day.readings.gospel[0];
    assert!(
        gospel
            .html
            .starts_with("<p class=\"lectio-paragraph\"><sup class=\"lectio-verse\">1</sup>")
    );
    let alternate = gospel.alternate.as_ref().expect("alternate");
    assert_eq!(
        alternate.plain_text,
        "1 Now on the first day of the week 2 Therefore she ran"
    );
}

#[test_log::test(tokio::test)]
async fn failing_scripture_provider_keeps_the_day() {
    let liturgy = liturgy_server().await;
    let scripture = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&scripture)
        .await;

    let service = DayService::new(liturgy_source(&liturgy)).with_scripture(
        scripture_source(&scripture),
        4,
        Duration::from_secs(5),
    );
    let day = service.liturgical_day(easter_2026()).await.expect("day");

    assert_eq!(day.readings.len(), 3);
    assert!(day.readings.items().all(|item| item.alternate.is_none()));
    assert!(day.antiphons.entrance.is_some());
}

#[test_log::test(tokio::test)]
async fn without_enrichment_no_scripture_calls_are_made() {
    let liturgy = liturgy_server().await;
    let service = DayService::new(liturgy_source(&liturgy));
    assert!(!service.enrichment_enabled());

    let day = service.liturgical_day(easter_2026()).await.expect("day");
    assert!(day.readings.items().all(|item| item.alternate.is_none()));
}

#[test_log::test(tokio::test)]
async fn liturgy_failure_is_an_error() {
    let liturgy = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&liturgy)
        .await;

    let service = DayService::new(liturgy_source(&liturgy));
    let error = service
        .liturgical_day(easter_2026())
        .await
        .expect_err("upstream failure");
    assert!(matches!(error, ServiceError::UpstreamStatus { .. }));
}
