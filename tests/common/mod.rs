use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use contactbox::config::Config;
use contactbox::store::JsonFileStore;

pub const ADMIN_SECRET: &str = "athletica-secret";

/// A running test server backed by its own temporary data directory.
pub struct TestApp {
    pub addr: std::net::SocketAddr,
    pub client: Client,
    pub data_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn submissions_file(&self) -> PathBuf {
        self.data_dir.join("submissions.json")
    }

    /// Submissions as currently stored on disk, or `None` if the file is absent.
    pub fn stored(&self) -> Option<Value> {
        let content = std::fs::read_to_string(self.submissions_file()).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn stored_count(&self) -> usize {
        self.stored()
            .and_then(|v| v.as_array().map(|a| a.len()))
            .unwrap_or(0)
    }

    /// Overwrite the store file with arbitrary content.
    pub fn write_store(&self, content: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("create data dir");
        std::fs::write(self.submissions_file(), content).expect("write store file");
    }

    /// POST a JSON payload to `/submit`, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body with the given content type, return (body, status).
    pub async fn submit_raw(&self, content_type: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Put a regular file where the data directory should be, so every
    /// store read and write fails with an I/O error.
    pub fn block_data_dir(&self) {
        std::fs::write(&self.data_dir, "not a directory").expect("write blocker file");
    }

    /// GET `/admin`, optionally with an `auth` credential, return (html, status).
    pub async fn admin(&self, auth: Option<&str>) -> (String, StatusCode) {
        let path = match auth {
            Some(secret) => format!("/admin?auth={secret}"),
            None => "/admin".to_string(),
        };
        let resp = self
            .client
            .get(self.url(&path))
            .send()
            .await
            .expect("admin request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }
}

/// Spawn the app on a random port with a fresh data directory.
pub async fn spawn_app() -> TestApp {
    let data_dir = std::env::temp_dir().join(format!(
        "contactbox_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    ));

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        data_dir: data_dir.clone(),
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        admin_secret: ADMIN_SECRET.to_string(),
        max_body_size: 64 * 1024,
        log_level: "warn".to_string(),
    };

    let store = Arc::new(JsonFileStore::new(config.submissions_file()));
    let app = contactbox::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        data_dir,
    }
}

/// Remove the test's data directory.
pub fn cleanup(app: TestApp) {
    if app.data_dir.is_dir() {
        let _ = std::fs::remove_dir_all(&app.data_dir);
    } else {
        let _ = std::fs::remove_file(&app.data_dir);
    }
}
