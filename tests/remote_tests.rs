use edlparser::{
    extract_locators, extract_locators_csv, extract_remote_locators, EdlParserError,
    ExtractOptions,
};
use log::info;
use std::fs;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn fixture_bytes() -> Vec<u8> {
    let file_path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/locators.edl");
    fs::read(file_path).expect("Failed to read locators.edl")
}

async fn serve_fixture(mock_server: &MockServer) -> String {
    let content = fixture_bytes();
    info!("Serving locators.edl: {} bytes", content.len());

    Mock::given(method("GET"))
        .and(path("/locators.edl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(content)
                .insert_header("content-type", "text/plain"),
        )
        .mount(mock_server)
        .await;

    format!("{}/locators.edl", mock_server.uri())
}

#[tokio::test]
async fn test_extract_remote_locators_with_wiremock() {
    let mock_server = MockServer::start().await;
    let url = serve_fixture(&mock_server).await;

    let report = extract_locators(url.clone(), &ExtractOptions::default())
        .await
        .unwrap();
    assert_eq!(report.table.len(), 3);
    assert_eq!(report.table.rows[0].shot_id, "ABC_123_4567");

    let direct = extract_remote_locators(url, &ExtractOptions::default())
        .await
        .unwrap();
    assert_eq!(direct, report);
}

#[tokio::test]
async fn test_remote_and_local_csv_match() {
    let mock_server = MockServer::start().await;
    let url = serve_fixture(&mock_server).await;
    let local = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/locators.edl");

    let options = ExtractOptions::default().with_locators_only(false);
    let remote_csv = extract_locators_csv(url, &options).await.unwrap();
    let local_csv = extract_locators_csv(local.to_string(), &options)
        .await
        .unwrap();

    assert_eq!(remote_csv, local_csv);
    assert_eq!(remote_csv.lines().count(), 5);
}

#[tokio::test]
async fn test_remote_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/gone.edl", mock_server.uri());
    let result = extract_locators(url, &ExtractOptions::default()).await;
    assert!(matches!(result, Err(EdlParserError::Source(_))));
}
