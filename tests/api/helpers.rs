use std::time::Duration;

use chrono::{DateTime, Utc};

use secrecy::Secret;

use tempfile::TempDir;

use url::Url;

use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

use fengai::app::Dashboard;
use fengai::client::ContentClient;
use fengai::store::{FileStorage, RecordStore};

pub const SPACE_ID: &str = "test-space";

pub struct TestApp {
    pub content_server: MockServer,
    pub data_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let content_server = MockServer::start().await;
        let data_dir = TempDir::new().expect("Failed to create data directory");

        Self {
            content_server,
            data_dir,
        }
    }

    pub fn content_client(&self) -> ContentClient {
        let api_base_url =
            Url::parse(&self.content_server.uri()).expect("Failed to parse mock server uri");
        let api_access_token = Secret::new("TestAccessToken".into());
        let api_timeout = Duration::from_secs(2);

        ContentClient::new(
            api_base_url,
            SPACE_ID,
            "master",
            api_access_token,
            api_timeout,
        )
        .expect("Failed to create content client")
    }

    /// A dashboard over the app's data directory.
    /// Dashboards built from the same app share persisted data.
    pub fn dashboard(&self) -> Dashboard<FileStorage> {
        let store = RecordStore::new(FileStorage::new(self.data_dir.path()));
        Dashboard::new(store, self.content_client())
    }

    /// Serve `items` for entries of `content_type`, expecting `times` requests
    pub async fn mock_entries(&self, content_type: &str, items: serde_json::Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/spaces/{}/environments/master/entries",
                SPACE_ID
            )))
            .and(query_param("content_type", content_type))
            .and(header("Authorization", "Bearer TestAccessToken"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": items })),
            )
            .expect(times)
            .mount(&self.content_server)
            .await;
    }

    /// Fail every content API request, expecting `times` requests
    pub async fn mock_outage(&self, times: u64) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(503))
            .expect(times)
            .mount(&self.content_server)
            .await;
    }
}

pub fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("Failed to parse timestamp")
        .with_timezone(&Utc)
}
