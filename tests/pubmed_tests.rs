use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use biosumm::sources::pubmed::{AbstractSource, PubMedClient, NOT_FOUND_MESSAGE};
use biosumm::types::error::Error;

fn client_for(server: &MockServer) -> PubMedClient {
    PubMedClient::with_base_url(format!("{}/efetch.fcgi", server.uri())).unwrap()
}

#[tokio::test]
async fn returns_the_first_abstract_text() {
    let server = MockServer::start().await;
    let xml = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation><Article>
        <Abstract><AbstractText>Hydroxychloroquine was not associated with benefit.</AbstractText></Abstract>
    </Article></MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "32511222"))
        .and(query_param("retmode", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(&server)
        .await;

    let abstract_text = client_for(&server).fetch_abstract(32_511_222).await.unwrap();
    assert_eq!(abstract_text, "Hydroxychloroquine was not associated with benefit.");
}

#[tokio::test]
async fn missing_record_returns_the_sentinel_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<PubmedArticleSet></PubmedArticleSet>"),
        )
        .mount(&server)
        .await;

    let abstract_text = client_for(&server).fetch_abstract(1).await.unwrap();
    assert_eq!(abstract_text, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn malformed_record_returns_the_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<Pubmed<broken"))
        .mount(&server)
        .await;

    let abstract_text = client_for(&server).fetch_abstract(2).await.unwrap();
    assert_eq!(abstract_text, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn transport_failure_is_distinguishable_from_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = client_for(&server).fetch_abstract(3).await.unwrap_err();
    assert!(matches!(error, Error::FetchFailed(_)));
}
