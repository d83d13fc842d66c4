use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use axisphere_api::app::{build_router, services::AppServices};
use axisphere_auth::{AdminAuth, AdminCredentials, InMemorySessionStore};
use axisphere_infra::{InMemoryContactStore, NoopEmailNotifier};

struct TestServer {
    base_url: String,
    contact_store: Arc<InMemoryContactStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, but with in-memory services and an
        // ephemeral port.
        let contact_store = Arc::new(InMemoryContactStore::default());
        let services = Arc::new(AppServices::new(
            contact_store.clone(),
            Arc::new(NoopEmailNotifier),
            AdminAuth::new(
                AdminCredentials::default(),
                Arc::new(InMemorySessionStore::default()),
            ),
        ));
        let app = build_router(services, "dist/spa");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            contact_store,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn contact_submission_requires_name_email_and_consent() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/contact", srv.base_url))
        .json(&json!({"name": "Asha", "message": "hi", "consent": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client
        .post(format!("{}/api/contact", srv.base_url))
        .json(&json!({"name": "Asha", "email": "asha@example.com", "message": "hi"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert!(srv.contact_store.all().is_empty());
}

#[tokio::test]
async fn contact_submission_is_stored_with_page_metadata() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!(
            "{}/api/contact?utm_source=newsletter&utm_campaign=launch",
            srv.base_url
        ))
        .json(&json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "company": "Rao & Co",
            "message": "We need help with ad campaigns.",
            "consent": true,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["stored"], true);
    // No email credentials wired in tests.
    assert_eq!(body["email"]["status"], "skipped");

    let stored = srv.contact_store.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Asha Rao");
    assert_eq!(
        stored[0].metadata.get("utm_source").map(String::as_str),
        Some("newsletter")
    );
    assert_eq!(
        stored[0].metadata.get("utm_campaign").map(String::as_str),
        Some("launch")
    );
}

#[tokio::test]
async fn pricing_catalog_lists_all_three_packages() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/packages", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let packages: serde_json::Value = res.json().await.unwrap();
    let packages = packages.as_array().unwrap();
    assert_eq!(packages.len(), 3);
    assert_eq!(packages[0]["name"], "AI Starter Package");
    assert_eq!(packages[0]["price_display"], "₹30,000.00");
    assert_eq!(packages[1]["price_display"], "₹75,000.00");
    assert_eq!(packages[2]["name"], "AI Enterprise Package");
    assert_eq!(packages[2]["price_display"], "Contact us");
}

#[tokio::test]
async fn preview_totals_follow_the_charged_amount_not_the_catalog() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // ₹50,000 negotiated on a package listed at ₹75,000.
    let res = client
        .post(format!("{}/api/invoices/preview", srv.base_url))
        .json(&json!({
            "package": "ai_growth",
            "client": {
                "name": "Dev Traders",
                "email": "dev@example.com",
            },
            "charged": 5_000_000,
            "billing": "full_package",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["view"]["subtotal"], "₹50,000.00");
    assert_eq!(body["view"]["tax"], "₹9,000.00");
    assert_eq!(body["view"]["total"], "₹59,000.00");
    assert_eq!(body["document"]["subtotal"], 5_000_000);
}

#[tokio::test]
async fn preview_rejects_a_nameless_client() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/invoices/preview", srv.base_url))
        .json(&json!({
            "package": "ai_starter",
            "client": {"name": "", "email": "dev@example.com"},
            "charged": 3_000_000,
            "billing": "full_package",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_downloads_a_pdf_named_after_the_invoice_number() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/invoices/export", srv.base_url))
        .json(&json!({
            "package": "ai_starter",
            "client": {"name": "Priya", "email": "priya@example.com"},
            "charged": 3_000_000,
            "billing": "full_package",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/pdf"
    );

    let disposition = res
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"AXI-"));
    assert!(disposition.ends_with(".pdf\""));

    let bytes = res.bytes().await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn admin_session_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/admin/login", srv.base_url))
        .json(&json!({"email": "admin@axisphere.in", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/api/admin/login", srv.base_url))
        .json(&json!({"email": "admin@axisphere.in", "password": "admin2024"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["session"]["is_authenticated"], true);

    let res = client
        .get(format!("{}/api/admin/session", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let session: serde_json::Value = res.json().await.unwrap();
    assert_eq!(session["email"], "admin@axisphere.in");

    let res = client
        .post(format!("{}/api/admin/logout", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/api/admin/session", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
