//! `HttpDomainStore` against a mock `/api/domains` endpoint

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use httpmock::prelude::*;
use serde_json::json;

use domain_inventory_store::{
    CreateDomainRequest, DomainRecord, DomainStatus, DomainStore, HttpDomainStore,
    HttpStoreConfig, ListDomainsParams, StoreError,
};

fn store(server: &MockServer, token: Option<&str>) -> HttpDomainStore {
    HttpDomainStore::new(HttpStoreConfig {
        base_url: server.base_url(),
        api_token: token.map(str::to_string),
        ..HttpStoreConfig::default()
    })
    .expect("store")
}

#[tokio::test]
async fn http_store_identifies_itself() {
    let server = MockServer::start_async().await;
    let store: Box<dyn DomainStore> = Box::new(store(&server, None));
    assert_eq!(store.id(), "http");
}

#[tokio::test]
async fn create_posts_normalized_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/domains")
                .header("Authorization", "JWT secret")
                .json_body(json!({ "name": "delta.com" }));
            then.status(201)
                .json_body(json!({ "id": "d4", "name": "delta.com", "status": "pending" }));
        })
        .await;

    let record = store(&server, Some("secret"))
        .create_domain(&CreateDomainRequest::new(" Delta.COM "))
        .await
        .expect("create");
    mock.assert_async().await;

    assert_eq!(
        record,
        DomainRecord::new("d4", "delta.com", DomainStatus::Pending)
    );
}

#[tokio::test]
async fn create_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/domains");
            then.status(500).body("Failed to create domain");
        })
        .await;

    let err = store(&server, None)
        .create_domain(&CreateDomainRequest::new("alpha.com"))
        .await
        .expect_err("should error");

    assert!(matches!(err, StoreError::ServerError { status: 500, .. }));
    assert_eq!(err.server_message(), Some("Failed to create domain"));
}

#[tokio::test]
async fn create_rejected_when_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/domains");
            then.status(401).body("Unauthorized");
        })
        .await;

    let err = store(&server, None)
        .create_domain(&CreateDomainRequest::new("alpha.com"))
        .await
        .expect_err("should error");

    assert!(matches!(err, StoreError::Unauthorized { .. }));
    assert!(err.is_expected());
}

#[tokio::test]
async fn create_with_malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/domains");
            then.status(201).body("created");
        })
        .await;

    let err = store(&server, None)
        .create_domain(&CreateDomainRequest::new("alpha.com"))
        .await
        .expect_err("should error");

    assert!(err.is_transport());
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn delete_sends_delete_to_item_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/domains/d1");
            then.status(204);
        })
        .await;

    store(&server, None)
        .delete_domain("d1")
        .await
        .expect("delete");
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_failure_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/domains/d2");
            then.status(500).body("Failed to delete domain");
        })
        .await;

    let err = store(&server, None)
        .delete_domain("d2")
        .await
        .expect_err("should error");

    assert!(matches!(err, StoreError::ServerError { status: 500, .. }));
}

#[tokio::test]
async fn list_maps_documents() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/domains")
                .query_param("depth", "0")
                .query_param("limit", "250")
                .query_param("sort", "-createdAt");
            then.status(200).json_body(json!({
                "docs": [
                    { "id": "d1", "name": "alpha.com", "status": "verified" },
                    { "id": 2, "name": "beta.net" },
                    { "id": "d3", "name": null },
                    { "id": "d4", "name": "" }
                ],
                "totalDocs": 4
            }));
        })
        .await;

    let records = store(&server, None)
        .list_domains(&ListDomainsParams::default())
        .await
        .expect("list");
    mock.assert_async().await;

    assert_eq!(
        records,
        vec![
            DomainRecord::new("d1", "alpha.com", DomainStatus::Verified),
            DomainRecord::new("2", "beta.net", DomainStatus::Pending),
        ]
    );
}

#[tokio::test]
async fn unreachable_store_is_network_error() {
    let store = HttpDomainStore::new(HttpStoreConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        ..HttpStoreConfig::default()
    })
    .expect("store");

    let err = store
        .delete_domain("d1")
        .await
        .expect_err("should error");

    assert!(err.is_transport());
}
