//! Integration tests for the HTTP adapter and resource façade against a
//! mock backend.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use caritas_client::{
    ApiError, CampaignFilter, CampaignKind, CampaignStatus, CaritasClient, ClientConfig,
    Credentials, FileUpload, MemorySessionStore, NewDonatedItem, NewFund, Session, SessionStore,
    UserSummary,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_session() -> Session {
    Session {
        token: "t0k3n".to_owned(),
        user: UserSummary {
            id: "u1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.org".to_owned(),
        },
        roles: vec!["donor".to_owned()],
    }
}

fn client_for(server: &MockServer) -> (CaritasClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let client = CaritasClient::with_store(
        ClientConfig::new(server.uri()),
        Arc::clone(&store) as Arc<dyn SessionStore>,
    )
    .unwrap();
    (client, store)
}

async fn mount_csrf(server: &MockServer, expected_fetches: u64) {
    Mock::given(method("GET"))
        .and(path("/sanctum/csrf-cookie"))
        .respond_with(
            ResponseTemplate::new(204)
                .insert_header("set-cookie", "XSRF-TOKEN=abc%3D123; path=/; samesite=lax"),
        )
        .expect(expected_fetches)
        .mount(server)
        .await;
}

#[tokio::test]
async fn bearer_token_attached_when_session_present() {
    let server = MockServer::start().await;
    let (client, store) = client_for(&server);
    store.set(sample_session());

    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .and(header("authorization", "Bearer t0k3n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "u1", "name": "Ada", "email": "ada@example.org" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.auth().current_user().await.unwrap();
    assert_eq!(user.id, "u1");
}

#[tokio::test]
async fn no_bearer_header_while_logged_out() {
    let server = MockServer::start().await;
    let (client, store) = client_for(&server);
    assert!(store.get().is_none());

    Mock::given(method("GET"))
        .and(path("/api/v1/campaigns"))
        .and(|request: &wiremock::Request| !request.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .campaigns()
        .list(&CampaignFilter::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn csrf_cookie_fetched_exactly_once_across_mutations() {
    let server = MockServer::start().await;
    let (client, _store) = client_for(&server);
    mount_csrf(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/funds"))
        .and(header("x-xsrf-token", "abc=123"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "f1", "campaignId": "c1", "amount": 50_000.0, "status": "pending" }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let fund = NewFund {
        campaign_id: "c1".to_owned(),
        amount: 50_000.0,
        donor_name: None,
    };
    client.donations().create_fund(&fund).await.unwrap();
    client.donations().create_fund(&fund).await.unwrap();
    // MockServer verifies the expect(1) on the cookie endpoint at drop.
}

#[tokio::test]
async fn validation_error_carries_field_messages() {
    let server = MockServer::start().await;
    let (client, _store) = client_for(&server);
    mount_csrf(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": { "email": ["Email is invalid"] }
        })))
        .mount(&server)
        .await;

    let error = client
        .auth()
        .login(&Credentials {
            email: "not-an-email".to_owned(),
            password: "pw".to_owned(),
        })
        .await
        .unwrap_err();
    match error {
        ApiError::Validation(errors) => {
            assert_eq!(errors.first("email"), Some("Email is invalid"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn auth_error_is_classified_and_leaves_session_untouched() {
    let server = MockServer::start().await;
    let (client, store) = client_for(&server);
    store.set(sample_session());

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/users"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let error = client.users().list(None).await.unwrap_err();
    assert!(matches!(error, ApiError::Auth { status: 401 }));
    // Clearing the session is the caller's decision, never the adapter's.
    assert!(store.get().is_some());
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    let (client, _store) = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/campaigns/c1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let error = client.campaigns().get("c1").await.unwrap_err();
    match error {
        ApiError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn campaign_list_normalizes_double_wrapped_paginator() {
    let server = MockServer::start().await;
    let (client, _store) = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/campaigns"))
        .and(query_param("type", "fundraiser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "data": [{
                    "id": "x",
                    "type": "fundraiser",
                    "attributes": { "title": "School roof", "status": "on_progress" }
                }],
                "current_page": 1,
                "last_page": 1
            }
        })))
        .mount(&server)
        .await;

    let page = client
        .campaigns()
        .list(&CampaignFilter {
            kind: Some(CampaignKind::Fundraiser),
            ..CampaignFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items[0].attributes.status, CampaignStatus::OnProgress);
}

#[tokio::test]
async fn empty_envelope_yields_empty_list_not_error() {
    let server = MockServer::start().await;
    let (client, _store) = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let page = client
        .campaigns()
        .list(&CampaignFilter::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
}

#[tokio::test]
async fn donated_item_upload_sends_multipart_fields_and_photos() {
    let server = MockServer::start().await;
    let (client, _store) = client_for(&server);
    mount_csrf(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/donated-items"))
        .and(body_string_contains("name=\"campaign_id\""))
        .and(body_string_contains("name=\"photos[]\""))
        .and(body_string_contains("filename=\"box.jpg\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": "d1",
                "campaignId": "c1",
                "quantity": 3,
                "status": "pending"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item = NewDonatedItem {
        campaign_id: "c1".to_owned(),
        description: "Winter clothes".to_owned(),
        quantity: 3,
        donor_name: Some("Ada".to_owned()),
    };
    let photos = vec![FileUpload::new("box.jpg", "image/jpeg", b"jpegbytes".to_vec())];
    let donated = client
        .donations()
        .create_donated_item(&item, photos)
        .await
        .unwrap();
    assert_eq!(donated.id, "d1");
}

#[tokio::test]
async fn login_writes_store_and_logout_clears_it() {
    let server = MockServer::start().await;
    let (client, store) = client_for(&server);
    mount_csrf(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "token": "fresh-token",
                "user": { "id": "u1", "name": "Ada", "email": "ada@example.org" },
                "roles": ["donor"]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let session = client
        .auth()
        .login(&Credentials {
            email: "ada@example.org".to_owned(),
            password: "pw".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(session.token, "fresh-token");
    assert_eq!(store.get().map(|s| s.token), Some("fresh-token".to_owned()));

    client.auth().logout().await.unwrap();
    assert!(store.get().is_none());
}

#[tokio::test]
async fn logout_clears_store_even_when_token_already_dead() {
    let server = MockServer::start().await;
    let (client, store) = client_for(&server);
    store.set(sample_session());
    mount_csrf(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/logout"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    client.auth().logout().await.unwrap();
    assert!(store.get().is_none());
}
