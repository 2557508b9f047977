//! HTTP surface tests with a stubbed chat-completion provider and an
//! in-memory portfolio slot.

use resume_enhancer::enhancer::{ChatProvider, Enhancer};
use resume_enhancer::error::EnhanceError;
use resume_enhancer::portfolio::{MemorySlot, SnapshotStore};
use resume_enhancer::web::build_rocket;
use rocket::http::{ContentType, Method, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

enum Reply {
    Text(String),
    Upstream(String),
    Timeout,
}

struct StubProvider {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubProvider {
    fn text(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn upstream_failure(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Upstream(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn timing_out() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Timeout,
            calls: AtomicUsize::new(0),
        })
    }
}

#[rocket::async_trait]
impl ChatProvider for StubProvider {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, EnhanceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Upstream(message) => Err(EnhanceError::Upstream(message.clone())),
            Reply::Timeout => Err(EnhanceError::Timeout),
        }
    }
}

async fn client_with(provider: Arc<StubProvider>) -> Client {
    let enhancer = Enhancer::new(provider);
    let store = SnapshotStore::new(Box::new(MemorySlot::new()));
    let rocket = build_rocket(rocket::Config::figment(), enhancer, store);
    Client::tracked(rocket).await.expect("valid rocket instance")
}

fn valid_payload() -> Value {
    json!({
        "personalInfo": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "targetRole": "Backend Engineer"
        },
        "experience": [{
            "company": "Acme",
            "role": "Engineer",
            "duration": "2020-2023",
            "location": "Remote",
            "description": "Built services"
        }],
        "education": [{
            "institution": "MIT",
            "degree": "BSc",
            "year": "2019",
            "grade": "3.9"
        }],
        "skills": ["Rust", "SQL"],
        "jobDescription": "We need a backend engineer with Rust experience."
    })
}

#[rocket::async_test]
async fn test_enhance_success_envelope() {
    let stub = StubProvider::text(
        r#"{"summary":"Strong engineer","skills":["Rust"],"experience":[],"atsScore":82,"keywords":["rust"]}"#,
    );
    let client = client_with(stub.clone()).await;

    let response = client
        .post("/api/resume/enhance")
        .header(ContentType::JSON)
        .body(valid_payload().to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["summary"], json!("Strong engineer"));
    assert_eq!(body["data"]["atsScore"], json!(82));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[rocket::async_test]
async fn test_enhance_missing_job_description_is_400_without_call() {
    let stub = StubProvider::text("{}");
    let client = client_with(stub.clone()).await;

    let mut payload = valid_payload();
    payload["jobDescription"] = json!("");

    let response = client
        .post("/api/resume/enhance")
        .header(ContentType::JSON)
        .body(payload.to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("jobDescription"));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[rocket::async_test]
async fn test_enhance_missing_personal_info_is_400() {
    let stub = StubProvider::text("{}");
    let client = client_with(stub.clone()).await;

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("personalInfo");

    let response = client
        .post("/api/resume/enhance")
        .header(ContentType::JSON)
        .body(payload.to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[rocket::async_test]
async fn test_enhance_rejects_non_post() {
    let client = client_with(StubProvider::text("{}")).await;

    for method in [Method::Get, Method::Put, Method::Delete, Method::Patch] {
        let response = client.req(method, "/api/resume/enhance").dispatch().await;
        assert_eq!(
            response.status(),
            Status::MethodNotAllowed,
            "{} should be rejected",
            method
        );
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["success"], json!(false));
    }
}

#[rocket::async_test]
async fn test_enhance_upstream_failure_is_500() {
    let stub = StubProvider::upstream_failure("Provider returned status 429: quota exceeded");
    let client = client_with(stub.clone()).await;

    let response = client
        .post("/api/resume/enhance")
        .header(ContentType::JSON)
        .body(valid_payload().to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::InternalServerError);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
}

#[rocket::async_test]
async fn test_enhance_timeout_is_500() {
    let stub = StubProvider::timing_out();
    let client = client_with(stub.clone()).await;

    let response = client
        .post("/api/resume/enhance")
        .header(ContentType::JSON)
        .body(valid_payload().to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::InternalServerError);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("timed out"));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[rocket::async_test]
async fn test_enhance_invalid_model_reply_carries_raw() {
    let stub = StubProvider::text("No JSON in this reply, sorry.");
    let client = client_with(stub.clone()).await;

    let response = client
        .post("/api/resume/enhance")
        .header(ContentType::JSON)
        .body(valid_payload().to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::InternalServerError);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["raw"], json!("No JSON in this reply, sorry."));
}

#[rocket::async_test]
async fn test_portfolio_save_then_get_round_trips() {
    let client = client_with(StubProvider::text("{}")).await;

    let payload = json!({
        "personalInfo": { "name": "Jane Doe", "email": "jane@example.com" },
        "enhanced": {
            "summary": "Strong engineer",
            "skills": ["Rust"],
            "experience": [],
            "atsScore": 82,
            "keywords": ["rust"]
        },
        "educations": [{
            "institution": "MIT",
            "degree": "BSc",
            "year": "2019",
            "grade": "3.9"
        }]
    });

    let response = client
        .post("/api/portfolio")
        .header(ContentType::JSON)
        .body(payload.to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("jane-doe-"));

    let response = client
        .get(format!("/api/portfolio/{}", id))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["data"]["personalInfo"]["name"], json!("Jane Doe"));
    assert_eq!(body["data"]["enhanced"]["atsScore"], json!(82));
    assert_eq!(body["data"]["educations"][0]["institution"], json!("MIT"));
    assert!(body["data"]["createdAt"].as_str().is_some());
}

#[rocket::async_test]
async fn test_portfolio_get_unknown_id_is_404() {
    let client = client_with(StubProvider::text("{}")).await;

    let response = client.get("/api/portfolio/nobody-12345").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[rocket::async_test]
async fn test_root_banner_and_health() {
    let client = client_with(StubProvider::text("{}")).await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("ATS Resume Builder API"));

    let response = client.get("/api/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}
