use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use diacare_render::pages::Pages;
use diacare_server::state::AppState;
use diacare_storage::backend::Backend;
use diacare_storage::memory::MemoryBackend;
use diacare_storage::records::RecordStore;

pub struct TestApp {
    pub router: Router,
    pub memory: MemoryBackend,
}

impl TestApp {
    pub fn new() -> Self {
        let memory = MemoryBackend::new();
        let state = AppState {
            store: RecordStore::new(Backend::Memory(memory.clone())),
            pages: Arc::new(Pages::load().unwrap()),
        };
        Self {
            router: diacare_server::app(state),
            memory,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.router.clone().oneshot(req).await.unwrap()
    }

    /// Number of person documents, excluding the phone index.
    pub async fn person_count(&self) -> usize {
        self.memory
            .list("persons/")
            .await
            .iter()
            .filter(|key| !key.starts_with("persons/by-phone/"))
            .count()
    }
}

pub fn location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
