use anyhow::Result;
use httpmock::{Method::GET, Mock, MockServer};
use remotejobs::{RawRecord, ScraperConfig};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// The path the mock feed is served from.
pub const API_PATH: &str = "/api";

// --- Test Setup ---

/// A mock jobs API plus a scratch directory, isolated per test.
pub struct TestSetup {
    pub server: MockServer,
    pub dir: TempDir,
}

impl TestSetup {
    pub fn new() -> Result<Self> {
        Ok(Self {
            server: MockServer::start(),
            dir: tempfile::tempdir()?,
        })
    }

    pub fn api_url(&self) -> String {
        self.server.url(API_PATH)
    }

    /// A config aimed at the mock server with every delay set to zero.
    pub fn config(&self) -> ScraperConfig {
        ScraperConfig {
            api_url: self.api_url(),
            base_url: "https://remoteok.com".to_string(),
            max_retries: 3,
            timeout_secs: 5,
            retry_delay_ms: 0,
            rate_limit_backoff_ms: 0,
            courtesy_delay_ms: 0,
            ..ScraperConfig::default()
        }
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Serves `body` with status 200 on `GET /api`.
    pub fn mock_feed(&self, body: &Value) -> Mock<'_> {
        let body = body.to_string();
        self.server.mock(|when, then| {
            when.method(GET).path(API_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .body(body);
        })
    }

    /// Answers every `GET /api` with `status` and an empty body.
    pub fn mock_status(&self, status: u16) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET).path(API_PATH);
            then.status(status);
        })
    }
}

// --- Fixtures ---

/// A minimal raw listing with just the two keys the fetcher requires.
pub fn raw_job(id: &str, position: &str) -> RawRecord {
    let mut job = RawRecord::new();
    job.insert("id".to_string(), json!(id));
    job.insert("position".to_string(), json!(position));
    job
}

/// Builds a raw listing from a JSON object literal.
pub fn raw_from(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("raw_from expects a JSON object, got {other}"),
    }
}

/// A feed shaped like the real API: a legal notice first, then jobs.
pub fn sample_feed() -> Value {
    json!([
        {
            "last_updated": 1700000000,
            "legal": "API Terms of Service: Please link back to the URL on Remote OK."
        },
        {
            "slug": "remote-senior-rust-engineer-acme-1001",
            "id": "1001",
            "epoch": 1700000000,
            "date": 1700000000,
            "company": "Acme Corp",
            "company_logo": "https://remoteok.com/assets/acme.png",
            "position": "Senior <b>Rust</b> Engineer",
            "tags": ["rust", "backend", "senior"],
            "logo": "https://remoteok.com/assets/acme-logo.png",
            "description": "<p>Build   fast\nthings.</p>",
            "location": "Worldwide",
            "salary_min": 120000,
            "salary_max": 160000,
            "apply_url": "https://remoteok.com/apply/1001",
            "verified": true,
            "url": "https://remoteok.com/remote-jobs/1001"
        },
        {
            "id": 1002,
            "position": "Junior Frontend Developer",
            "company": "Widgets Inc",
            "tags": "javascript, react",
            "description": "Great for a new grad.",
            "salary_min": "50000",
            "date": "1700000000"
        },
        {
            "id": "1003",
            "company": "No Position LLC"
        },
        {
            "id": "1004",
            "position": "Data Engineer",
            "company": "Pipelines Co",
            "salary_max": 90000
        }
    ])
}
