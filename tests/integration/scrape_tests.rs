use crate::fixtures::{
    serve, serve_printer, status_page, test_settings, topbar_page, STATUS_PATH, TOPBAR_PATH,
};
use printer_status::config::load_config;
use printer_status::printer::PrinterScraper;
use printer_status::{scrape_printer, ExtractError, PageRole, ScrapeError};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::{MockServer, ResponseTemplate};

const MODEL: &str = "Lexmark MS811";

#[tokio::test]
async fn test_full_scrape_cycle() {
    let server = MockServer::start().await;
    serve_printer(
        &server,
        status_page(&["Cheio", "Baixo", "Cheio"], "..~42%"),
        topbar_page(MODEL, "Pronto"),
    )
    .await;

    let snapshot = scrape_printer(&server.uri(), test_settings(), MODEL)
        .await
        .expect("scrape should succeed");

    assert_eq!(snapshot.address(), server.uri());
    assert_eq!(snapshot.model(), "Lexmark MS811");
    assert_eq!(snapshot.status_line(), "Pronto");
    assert_eq!(snapshot.tray_levels(), &["Cheio", "Baixo", "Cheio"]);
    assert_eq!(snapshot.toner_pct(), 42);
    assert_eq!(snapshot.maintenance_kit_pct(), 80);
    assert_eq!(snapshot.roller_kit_pct(), 75);
    assert_eq!(snapshot.imaging_unit_pct(), "61");
}

#[tokio::test]
async fn test_status_line_encoding_repaired() {
    let server = MockServer::start().await;
    serve_printer(
        &server,
        status_page(&["Cheio", "Cheio", "Cheio"], "~90%"),
        topbar_page(MODEL, "Modo de economia: NÃ£o"),
    )
    .await;

    let snapshot = scrape_printer(&server.uri(), test_settings(), MODEL)
        .await
        .unwrap();

    assert_eq!(snapshot.status_line(), "Modo de economia: Não");
}

#[tokio::test]
async fn test_incompatible_model() {
    let server = MockServer::start().await;
    serve_printer(
        &server,
        status_page(&["Cheio", "Baixo", "Cheio"], "..~42%"),
        topbar_page("Lexmark MX611dhe", "Pronto"),
    )
    .await;

    let result = scrape_printer(&server.uri(), test_settings(), MODEL).await;

    match result {
        Err(ScrapeError::Extract(ExtractError::IncompatibleModel { expected, found })) => {
            assert_eq!(expected, "Lexmark MS811");
            assert_eq!(found, "Lexmark MX611dhe");
        }
        other => panic!("expected IncompatibleModel, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_default_tray() {
    let server = MockServer::start().await;
    serve_printer(
        &server,
        status_page(&["Cheio", "Baixo"], "..~42%"),
        topbar_page(MODEL, "Pronto"),
    )
    .await;

    let result = scrape_printer(&server.uri(), test_settings(), MODEL).await;

    assert!(matches!(
        result,
        Err(ScrapeError::Extract(ExtractError::MissingElement(ref name))) if name == "default_tray"
    ));
}

#[tokio::test]
async fn test_unreachable_printer() {
    let server = MockServer::start().await;
    serve(&server, STATUS_PATH, ResponseTemplate::new(404)).await;
    serve(&server, TOPBAR_PATH, ResponseTemplate::new(503)).await;

    let result = scrape_printer(&server.uri(), test_settings(), MODEL).await;

    match result {
        Err(ScrapeError::PageUnreachable { address }) => assert_eq!(address, server.uri()),
        other => panic!("expected PageUnreachable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_one_page_missing_names_role() {
    let server = MockServer::start().await;
    serve(
        &server,
        STATUS_PATH,
        ResponseTemplate::new(200).set_body_string(status_page(&["Cheio"; 3], "~1%")),
    )
    .await;
    serve(
        &server,
        TOPBAR_PATH,
        ResponseTemplate::new(200)
            .set_body_string(topbar_page(MODEL, "Pronto"))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let result = scrape_printer(&server.uri(), test_settings(), MODEL).await;

    assert!(matches!(
        result,
        Err(ScrapeError::MissingPage {
            role: PageRole::Topbar
        })
    ));
}

#[tokio::test]
async fn test_unknown_model_rejected_before_fetching() {
    let server = MockServer::start().await;

    let result = scrape_printer(&server.uri(), test_settings(), "Lexmark MX611dhe").await;

    assert!(matches!(result, Err(ScrapeError::UnknownModel(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scraper_from_config_file() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    serve_printer(
        &first,
        status_page(&["Cheio", "Baixo", "Cheio"], "..~42%"),
        topbar_page(MODEL, "Pronto"),
    )
    .await;
    serve_printer(
        &second,
        status_page(&["Vazio", "Vazio", "Baixo"], "..~7%"),
        topbar_page(MODEL, "Bandeja 1 vazia"),
    )
    .await;

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[fetcher]
worker-count = 2
request-timeout-ms = 500

[[printer]]
name = "first"
address = "{}"

[[printer]]
name = "second"
address = "{}/"
model = "Lexmark MS811"
"#,
        first.uri(),
        second.uri()
    )
    .unwrap();
    file.flush().unwrap();

    let config = load_config(file.path()).unwrap();
    let mut toner = Vec::new();
    for printer in &config.printers {
        let scraper = PrinterScraper::new(config.fetcher.settings(), &printer.model).unwrap();
        let snapshot = scraper.scrape(&printer.address).await.unwrap();
        toner.push(snapshot.toner_pct());
    }

    assert_eq!(toner, vec![42, 7]);
}
