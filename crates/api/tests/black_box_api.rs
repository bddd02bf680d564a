use std::sync::{Arc, Mutex};

use axum::Json;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Router;
use serde_json::{Value, json};

use gridbase_api::app::{AppState, build_app};
use gridbase_api::config::Config;
use gridbase_client::ApiClient;
use gridbase_core::{
    CalendarViewOptions, FieldId, GalleryViewOptions, ShareId, TableId, View, ViewOptions,
    ViewType,
};

struct TestServer {
    base_url: String,
    state: Arc<AppState>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the app on an ephemeral port, forwarding share requests to
    /// `internal_origin` (or to itself when `None`).
    async fn spawn(internal_origin: Option<String>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let config = Config {
            port: addr.port(),
            internal_origin: internal_origin.unwrap_or_else(|| base_url.clone()),
        };
        let state = Arc::new(AppState::new(&config).expect("route registration failed"));
        let app = build_app(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            state,
            handle,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }

    /// Seed a shared calendar view directly into state.
    fn seed_shared_view(&self) -> (View, ShareId) {
        let mut view = View::new(TableId::generate(), "Shared events", ViewType::Calendar);
        let share_id = ShareId::generate();
        view.share_id = Some(share_id.clone());
        view.enable_share = true;
        self.state.seed_view(view.clone());
        (view, share_id)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn(None).await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status().as_u16(), 200);
}

#[tokio::test]
async fn create_then_fetch_view() {
    let srv = TestServer::spawn(None).await;
    let client = srv.client();
    let table_id = TableId::generate();

    let created = client
        .create_view(&table_id, "Events", ViewType::Calendar)
        .await
        .unwrap();
    assert_eq!(created.name, "Events");
    assert_eq!(created.table_id, table_id);

    let fetched = client.get_view(&table_id, &created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn malformed_ids_are_rejected_with_validation_error() {
    let srv = TestServer::spawn(None).await;

    let res = reqwest::get(format!("{}/table/bogus/view/viwAbc1", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn unknown_view_is_not_found() {
    let srv = TestServer::spawn(None).await;
    let err = srv
        .client()
        .get_view(&TableId::generate(), &gridbase_core::ViewId::generate())
        .await
        .unwrap_err();
    assert_eq!(err.status, 404);
    assert_eq!(err.code, gridbase_core::ErrorCode::NotFound);
}

#[tokio::test]
async fn locked_views_reject_mutation_until_unlocked() {
    let srv = TestServer::spawn(None).await;
    let client = srv.client();
    let table_id = TableId::generate();
    let view = client
        .create_view(&table_id, "Events", ViewType::Calendar)
        .await
        .unwrap();

    client
        .update_view_locked(&table_id, &view.id, true)
        .await
        .unwrap();
    let locked = client.get_view(&table_id, &view.id).await.unwrap();
    assert!(locked.is_locked);

    let err = client
        .update_view_name(&table_id, &view.id, "Renamed")
        .await
        .unwrap_err();
    assert_eq!(err.code, gridbase_core::ErrorCode::ViewLocked);
    assert_eq!(err.status, 400);

    // The locked route itself still works on a locked view.
    client
        .update_view_locked(&table_id, &view.id, false)
        .await
        .unwrap();
    client
        .update_view_name(&table_id, &view.id, "Renamed")
        .await
        .unwrap();
    let renamed = client.get_view(&table_id, &view.id).await.unwrap();
    assert_eq!(renamed.name, "Renamed");
}

#[tokio::test]
async fn options_are_replaced_wholesale_and_type_checked() {
    let srv = TestServer::spawn(None).await;
    let client = srv.client();
    let table_id = TableId::generate();
    let view = client
        .create_view(&table_id, "Events", ViewType::Calendar)
        .await
        .unwrap();

    let start = FieldId::generate();
    let options = ViewOptions::Calendar(CalendarViewOptions {
        start_date_field_id: Some(start.clone()),
        ..Default::default()
    });
    client
        .update_view_options(&table_id, &view.id, &options)
        .await
        .unwrap();

    let fetched = client.get_view(&table_id, &view.id).await.unwrap();
    assert_eq!(fetched.options, Some(options));

    let err = client
        .update_view_options(
            &table_id,
            &view.id,
            &ViewOptions::Gallery(GalleryViewOptions {
                is_cover_fit: Some(true),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, gridbase_core::ErrorCode::ValidationError);
}

#[tokio::test]
async fn empty_options_payload_is_accepted_on_gallery_views() {
    // An all-unset bag serializes as `{}`, which carries no type information.
    let srv = TestServer::spawn(None).await;
    let client = srv.client();
    let table_id = TableId::generate();
    let view = client
        .create_view(&table_id, "Shots", ViewType::Gallery)
        .await
        .unwrap();

    client
        .update_view_options(
            &table_id,
            &view.id,
            &ViewOptions::Gallery(GalleryViewOptions::default()),
        )
        .await
        .unwrap();

    let fetched = client.get_view(&table_id, &view.id).await.unwrap();
    assert_eq!(
        fetched.options,
        Some(ViewOptions::Gallery(GalleryViewOptions::default()))
    );
}

#[tokio::test]
async fn openapi_document_lists_the_served_surface() {
    let srv = TestServer::spawn(None).await;
    let res = reqwest::get(format!("{}/openapi.json", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);

    let doc: Value = res.json().await.unwrap();
    assert_eq!(doc["openapi"], "3.0.3");
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/table/{tableId}/view/{viewId}/locked"));
    assert!(paths.contains_key("/share/{shareId}/view/{viewId}"));
}

#[tokio::test]
async fn share_proxy_forwards_even_without_a_session_cookie() {
    // Internal origin left at default: the proxy calls back into this app.
    let srv = TestServer::spawn(None).await;
    let (view, share_id) = srv.seed_shared_view();

    let res = reqwest::get(format!(
        "{}/share/{}/view/{}",
        srv.base_url, share_id, view.id
    ))
    .await
    .unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], view.id.as_str());
}

#[tokio::test]
async fn share_proxy_attaches_the_inbound_session_cookie() {
    // Stub internal API that records the Cookie header it receives.
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let stub = Router::new().route(
        "/table/:table_id/view/:view_id",
        get({
            let seen = seen.clone();
            move |headers: HeaderMap| {
                let seen = seen.clone();
                async move {
                    let cookie = headers
                        .get("cookie")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    seen.lock().unwrap().push(cookie);
                    Json(json!({"proxied": true}))
                }
            }
        }),
    );
    let stub_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let stub_origin = format!("http://{}", stub_listener.local_addr().unwrap());
    let stub_handle = tokio::spawn(async move {
        axum::serve(stub_listener, stub).await.unwrap();
    });

    let srv = TestServer::spawn(Some(stub_origin)).await;
    let (view, share_id) = srv.seed_shared_view();
    let share_url = format!("{}/share/{}/view/{}", srv.base_url, share_id, view.id);
    let client = reqwest::Client::new();

    // Without a cookie: forwarded, no Cookie header outbound.
    let res = client.get(&share_url).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 200);

    // With a session cookie among others: only the session pair forwards.
    let res = client
        .get(&share_url)
        .header("cookie", "theme=dark; gridbase_session=s3cret")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 200);

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen, vec![None, Some("gridbase_session=s3cret".to_string())]);
    stub_handle.abort();
}

#[tokio::test]
async fn share_requires_the_enable_flag() {
    let srv = TestServer::spawn(None).await;
    let mut view = View::new(TableId::generate(), "Private", ViewType::Gallery);
    let share_id = ShareId::generate();
    view.share_id = Some(share_id.clone());
    view.enable_share = false;
    srv.state.seed_view(view.clone());

    let res = reqwest::get(format!(
        "{}/share/{}/view/{}",
        srv.base_url, share_id, view.id
    ))
    .await
    .unwrap();
    assert_eq!(res.status().as_u16(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn unreachable_internal_api_maps_to_bad_gateway() {
    let srv = TestServer::spawn(Some("http://127.0.0.1:1".to_string())).await;
    let (view, share_id) = srv.seed_shared_view();

    let res = reqwest::get(format!(
        "{}/share/{}/view/{}",
        srv.base_url, share_id, view.id
    ))
    .await
    .unwrap();
    assert_eq!(res.status().as_u16(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "bad_gateway");
}
