mod common;

use common::{blocking, client};
use dnsme::domain::{SortIndex, SortOrder};
use dnsme::{ClientError, Page};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn domain_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "id": id,
        "created": 1_420_070_400_000_i64,
        "delegateNameServers": ["ns1.example.net."],
        "folderId": 1,
        "gtdEnabled": false,
        "nameServers": [
            {"ipv6": "2600:1800:0::1", "ipv4": "208.94.148.2", "fqdn": "ns0.dnsmadeeasy.com"}
        ],
        "updated": 1_420_070_400_000_i64,
        "processMulti": false,
        "activeThirdParties": [],
        "pendingActionId": 0,
        "vanityId": 0,
        "vanityNameServers": []
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn get_domain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/managed/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(domain_json(5, "example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let domain = blocking(move || client(&uri).get_domain(5)).await.unwrap();

    assert_eq!(domain.id, 5);
    assert_eq!(domain.name, "example.com");
    assert_eq!(domain.delegate_name_servers, ["ns1.example.net."]);
    assert_eq!(domain.name_servers[0].ipv4, "208.94.148.2");
    assert_eq!(domain.folder_id, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_domain_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/managed/666"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client(&uri).get_domain(666))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::DomainIdNotFound { id: 666 }), "{err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_domain_with_unexpected_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"{ \\\"Name\\\": \\\"bla-bla-bla\\\" }\""))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client(&uri).get_domain(666))
        .await
        .unwrap_err();

    match err {
        ClientError::Decode { body, .. } => assert!(body.contains("bla-bla-bla")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn get_domain_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/managed/name"))
        .and(query_param("domainname", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(domain_json(9, "example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let domain = blocking(move || client(&uri).get_domain_by_name("example.com"))
        .await
        .unwrap();

    assert_eq!(domain.id, 9);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_domain_by_name_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/managed/name"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client(&uri).get_domain_by_name("missing.org"))
        .await
        .unwrap_err();

    match err {
        ClientError::DomainNotFound { name } => assert_eq!(name, "missing.org"),
        other => panic!("expected domain not found, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn private_domain_names_are_sent_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/managed/name"))
        .and(query_param("domainname", "corp.internal"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dns/managed"))
        .and(body_json(json!({"name": "example.local"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(domain_json(12, "example.local")))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let (by_name, added) = blocking(move || {
        let client = client(&uri);
        (
            client.get_domain_by_name("corp.internal"),
            client.add_domain("example.local"),
        )
    })
    .await;

    match by_name {
        Err(ClientError::DomainNotFound { name }) => assert_eq!(name, "corp.internal"),
        other => panic!("expected domain not found, got {other:?}"),
    }
    let added = added.unwrap();
    assert_eq!(added.id, 12);
    assert_eq!(added.name, "example.local");
}

#[tokio::test(flavor = "multi_thread")]
async fn add_domain_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dns/managed"))
        .and(body_json(json!({"name": "example.com"})))
        .respond_with(|req: &wiremock::Request| -> ResponseTemplate {
            ResponseTemplate::new(201).set_body_bytes(req.body.clone())
        })
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let domain = blocking(move || client(&uri).add_domain("example.com"))
        .await
        .unwrap();

    assert_eq!(domain.name, "example.com");
    assert_eq!(domain.id, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn add_domain_exists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": ["Domain already exists."]})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = blocking(move || client(&uri).add_domain("example.com"))
        .await
        .unwrap_err();

    match err {
        ClientError::DomainExists { name } => assert_eq!(name, "example.com"),
        other => panic!("expected domain exists, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_domain() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/dns/managed/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || client(&uri).delete_domain(42))
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_domain_errors() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/dns/managed/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dns/managed/43"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/dns/managed/44"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (missing, pending, unexpected) = blocking(move || {
        let client = client(&uri);
        (
            client.delete_domain(42),
            client.delete_domain(43),
            client.delete_domain(44),
        )
    })
    .await;

    assert!(matches!(missing, Err(ClientError::DomainIdNotFound { id: 42 })), "{missing:?}");
    assert!(matches!(pending, Err(ClientError::DomainIdPending { id: 43 })), "{pending:?}");
    match unexpected {
        Err(ClientError::UnexpectedStatus { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "unauthorized");
        }
        other => panic!("expected unexpected status, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn list_domains() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/managed"))
        .and(query_param("sidx", "id"))
        .and(query_param("sord", "ASC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalRecords": 1,
            "totalPackages": 1,
            "page": 1,
            "data": [{
                "id": 5,
                "name": "example.com",
                "created": 1_420_070_400_000_i64,
                "updated": 1_420_070_400_000_i64,
                "folderId": 1,
                "gtdEnabled": false,
                "processMulti": false,
                "activeThirdParties": [],
                "pendingActionId": 0
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let domains = blocking(move || client(&uri).list_domains("id", "ASC"))
        .await
        .unwrap();

    assert_eq!(domains.total_records, 1);
    assert_eq!(domains.page, 1);
    assert_eq!(domains.data.len(), 1);
    assert_eq!(domains.data[0].id, 5);
    assert_eq!(domains.data[0].name, "example.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_domains_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/managed"))
        .and(query_param("sidx", "updated"))
        .and(query_param("sord", "DESC"))
        .and(query_param("page", "2"))
        .and(query_param("rows", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalRecords": 30,
            "totalPages": 2,
            "page": 2,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let domains = blocking(move || {
        client(&uri).list_domains_page(SortIndex::Updated, SortOrder::Desc, Page::new(2, 25))
    })
    .await
    .unwrap();

    assert_eq!(domains.total_pages, 2);
    assert!(domains.data.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_domains_invalid_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let results = blocking(move || {
        let client = client(&uri);
        [
            client.list_domains("created", "ASC"),
            client.list_domains("Name", "ASC"),
            client.list_domains("name", "asc"),
            client.list_domains("name", "UP"),
        ]
    })
    .await;

    for result in results {
        assert!(matches!(result, Err(ClientError::InvalidArgument(_))), "{result:?}");
    }
}
