use std::time::Duration;

use disclosure_lib::disclosure_api::EdinetClient;
use disclosure_lib::{DisclosureError, FilingService};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> FilingService {
    FilingService::new(
        EdinetClient::with_base_url(&server.uri(), "test-key"),
        Duration::ZERO,
    )
}

fn listing(results: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "metadata": {"status": "200", "message": "OK"},
        "results": results
    }))
}

fn doc(doc_id: &str, filer: &str, form_code: &str, submitted: &str) -> Value {
    json!({
        "docID": doc_id,
        "edinetCode": "E00001",
        "filerName": filer,
        "ordinanceCode": "010",
        "formCode": form_code,
        "submitDateTime": submitted,
        "docDescription": "ignored"
    })
}

#[tokio::test]
async fn list_documents_filters_by_normalized_filer_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents.json"))
        .and(query_param("date", "2025-06-01"))
        .respond_with(listing(json!([
            doc("S100F001", "東京瓦斯株式会社", "030000", "2025-06-01 09:00"),
            doc("S100F002", "大阪瓦斯株式会社", "030000", "2025-06-01 10:00"),
            doc("S100F003", "東京ガス㈱", "120000", "2025-06-01 08:00"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = service(&server)
        .list_documents("2025-06-01", "2025-06-01", 2, "東京ガス", 100)
        .await
        .unwrap();

    let ids: Vec<_> = envelope
        .items
        .iter()
        .map(|d| d.doc_id.as_deref().unwrap())
        .collect();
    // Scan order is kept for listings.
    assert_eq!(ids, vec!["S100F001", "S100F003"]);
    assert_eq!(envelope.count, 2);

    let first = serde_json::to_value(&envelope.items[0]).unwrap();
    assert_eq!(first["edinetCode"], "E00001");
    assert!(first.get("docDescription").is_none());
}

#[tokio::test]
async fn list_documents_forwards_list_type_and_truncates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents.json"))
        .and(query_param("type", "1"))
        .respond_with(listing(json!([
            doc("S100G001", "A株式会社", "030000", "2025-06-01 09:00"),
            doc("S100G002", "B株式会社", "030000", "2025-06-01 10:00"),
            doc("S100G003", "C株式会社", "030000", "2025-06-01 11:00"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = service(&server)
        .list_documents("2025-06-01", "2025-06-03", 1, "", 2)
        .await
        .unwrap();
    assert_eq!(envelope.count, 2);
    assert_eq!(envelope.items[1].doc_id.as_deref(), Some("S100G002"));
}

#[tokio::test]
async fn list_documents_rejects_unknown_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let result = service(&server)
        .list_documents("2025-06-01", "2025-06-01", 3, "", 10)
        .await;
    assert!(matches!(result, Err(DisclosureError::Validation(_))));
}

#[tokio::test]
async fn latest_report_picks_newest_securities_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents.json"))
        .and(query_param("date", "2025-06-01"))
        .respond_with(listing(json!([
            doc("S100H001", "東京瓦斯株式会社", "030000", "2025-06-01 09:00"),
            doc("S100H002", "東京瓦斯株式会社", "120000", "2025-06-01 18:00"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents.json"))
        .and(query_param("date", "2025-06-02"))
        .respond_with(listing(json!([
            doc("S100H003", "東京瓦斯株式会社", "030001", "2025-06-02 13:00"),
        ])))
        .mount(&server)
        .await;

    let report = service(&server)
        .latest_securities_report("2025-06-01", "2025-06-02", "東京瓦斯", 2)
        .await
        .unwrap();

    assert_eq!(report.document.doc_id.as_deref(), Some("S100H003"));
    assert_eq!(report.form_name, "訂正有価証券報告書");
    assert_eq!(report.download.pdf, "/edinet/download/S100H003?type=pdf");
}

#[tokio::test]
async fn latest_report_not_found_without_securities_reports() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents.json"))
        .respond_with(listing(json!([
            doc("S100J001", "東京瓦斯株式会社", "120000", "2025-06-01 09:00"),
        ])))
        .mount(&server)
        .await;

    let result = service(&server)
        .latest_securities_report("2025-06-01", "2025-06-01", "", 2)
        .await;
    assert!(matches!(result, Err(DisclosureError::NotFound(_))));
}

#[tokio::test]
async fn download_returns_bytes_with_media_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/S100K001"))
        .and(query_param("type", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let file = service(&server).download("S100K001", "pdf").await.unwrap();
    assert_eq!(file.bytes, b"%PDF-1.7");
    assert_eq!(file.media_type, "application/pdf");
    assert_eq!(file.file_name, "S100K001.pdf");
}

#[tokio::test]
async fn download_propagates_upstream_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/S100K002"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let result = service(&server).download("S100K002", "zip").await;
    assert!(matches!(
        result,
        Err(DisclosureError::Upstream {
            status: Some(404),
            ..
        })
    ));
}

#[tokio::test]
async fn download_rejects_bad_input_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let svc = service(&server);

    assert!(matches!(
        svc.download("S100K001", "xlsx").await,
        Err(DisclosureError::Validation(_))
    ));
    assert!(matches!(
        svc.download("../etc/passwd", "zip").await,
        Err(DisclosureError::Validation(_))
    ));
}
