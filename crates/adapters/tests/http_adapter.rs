//! HTTP adapter tests against an in-process admin API

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use confdesk_adapters::{connect, ClientConfig, Connection, HttpApiAdapter, SessionHandle};
use confdesk_app::{SubmitOutcome, WizardStep};
use confdesk_domain::{
    BasicInfoField, Conference, FileAttachment, MediaKind, Occupation, SpeakerId, TierName,
};
use confdesk_ports::{ApiError, Notification, NotificationPort, RawApiPort};

#[derive(Debug, Clone)]
struct RecordedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl RecordedPart {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    authorization: Option<String>,
    parts: Vec<RecordedPart>,
    json: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn record(
    log: &Log,
    path: impl Into<String>,
    headers: &HeaderMap,
    parts: Vec<RecordedPart>,
    json: Option<Value>,
) {
    log.lock().unwrap().push(Recorded {
        path: path.into(),
        authorization: authorization(headers),
        parts,
        json,
    });
}

async fn read_parts(mut multipart: Multipart) -> Vec<RecordedPart> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let body = field.bytes().await.unwrap().to_vec();
        parts.push(RecordedPart {
            name,
            file_name,
            content_type,
            body,
        });
    }
    parts
}

async fn speakers_list(State(log): State<Log>, headers: HeaderMap) -> Json<Value> {
    record(&log, "/admin/speakers_list", &headers, Vec::new(), None);
    Json(json!({
        "status": "success",
        "data": [
            {"speaker_id": 7, "speaker_name": "Ada Obi", "speaker_title": "Prof."},
            {"speaker_id": 9, "speaker_name": "Bola Ade"}
        ]
    }))
}

async fn create_step_one(
    State(log): State<Log>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Json<Value> {
    let parts = read_parts(multipart).await;
    let taken = parts
        .iter()
        .any(|p| p.name == "title" && p.text() == "Taken Summit");
    record(&log, "/admin/create_conference/1", &headers, parts, None);

    if taken {
        Json(json!({"status": "error", "message": "title taken"}))
    } else {
        Json(json!({"status": "success", "data": {"token": "abc123"}}))
    }
}

async fn create_step_two(
    State(log): State<Log>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Json<Value> {
    let parts = read_parts(multipart).await;
    record(&log, "/admin/create_conference/2", &headers, parts, None);
    Json(json!({"status": "success", "message": "Conference created"}))
}

async fn edit_conference(
    State(log): State<Log>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&log, format!("/admin/edit_conference/{id}"), &headers, Vec::new(), Some(body));
    (StatusCode::OK, Json(json!({"status": "success"})))
}

async fn fails_with_message() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"status": "error", "message": "Venue is required"})),
    )
}

async fn fails_with_html() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
}

async fn not_json() -> &'static str {
    "ok"
}

async fn spawn_server() -> (String, Log) {
    let log: Log = Arc::default();
    let admin = Router::new()
        .route("/admin/speakers_list", get(speakers_list))
        .route("/admin/create_conference/1", post(create_step_one))
        .route("/admin/create_conference/2", post(create_step_two))
        .route("/admin/edit_conference/{id}", post(edit_conference))
        .route("/admin/fails_with_message", get(fails_with_message))
        .route("/admin/fails_with_html", get(fails_with_html))
        .route("/admin/not_json", get(not_json))
        .with_state(log.clone());
    let app = Router::new().nest("/api", admin);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), log)
}

#[derive(Default)]
struct RecordingNotifier(Mutex<Vec<Notification>>);

impl RecordingNotifier {
    fn taken(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url)
        .unwrap()
        .with_timeout(Duration::from_secs(5))
        .with_api_token("secret-token")
}

fn connection(base_url: &str) -> (Connection, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    (connect(&config(base_url), notifier.clone()), notifier)
}

fn signed_in_adapter(base_url: &str) -> HttpApiAdapter {
    let session = SessionHandle::new();
    session.sign_in("secret-token");
    HttpApiAdapter::new(&config(base_url), Arc::new(session))
}

#[tokio::test]
async fn wizard_creates_conference_over_http() {
    let (base_url, log) = spawn_server().await;
    let (conn, notifier) = connection(&base_url);
    let mut wizard = conn.wizard();

    wizard.open().await;
    assert_eq!(wizard.roster().len(), 2);

    let draft = wizard.draft_mut();
    draft.set_basic(BasicInfoField::Title, "Edu Summit");
    draft.set_basic(BasicInfoField::Theme, "Assessment");
    draft.set_basic(BasicInfoField::Venue, "Abuja");
    draft.set_basic(BasicInfoField::Start, "2025-03-01");
    draft.set_basic(BasicInfoField::End, "2025-03-03");
    draft.set_flyer(Some(FileAttachment::new("flyer.pdf", "application/pdf", b"%PDF".to_vec())));
    assert_eq!(wizard.next_step().await, SubmitOutcome::Succeeded);
    assert_eq!(wizard.correlation_token().map(|t| t.as_str()), Some("abc123"));

    let draft = wizard.draft_mut();
    draft.add_media(MediaKind::Gallery, FileAttachment::new("g1.png", "image/png", vec![1]));
    draft.add_media(MediaKind::Gallery, FileAttachment::new("g2.png", "image/png", vec![2]));
    draft.add_media(MediaKind::Sponsors, FileAttachment::new("logo.png", "image/png", vec![3]));
    draft.pricing.tier_mut(TierName::Basic).set_amount_naira("15000");
    draft.speakers.select_speaker(SpeakerId::new(7));
    draft.speakers.select_speaker(SpeakerId::new(7));
    draft.speakers.change_role(0, Occupation::KeyNoteAddress);
    assert_eq!(wizard.create_conference().await, SubmitOutcome::Succeeded);
    assert_eq!(wizard.step(), WizardStep::Done);

    assert_eq!(
        notifier.taken(),
        vec![Notification::success("Conference created")]
    );

    let log = log.lock().unwrap().clone();
    let paths: Vec<_> = log.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/admin/speakers_list",
            "/admin/create_conference/1",
            "/admin/create_conference/2",
        ]
    );
    assert!(log
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer secret-token")));

    let step_one = &log[1].parts;
    let flyer = step_one.iter().find(|p| p.name == "flyer").unwrap();
    assert_eq!(flyer.file_name.as_deref(), Some("flyer.pdf"));
    assert_eq!(flyer.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(flyer.body, b"%PDF".to_vec());
    let subthemes = step_one.iter().find(|p| p.name == "subthemes_input").unwrap();
    assert_eq!(subthemes.text(), r#"[""]"#);

    let step_two = &log[2].parts;
    let names: Vec<_> = step_two.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "token",
            "gallery[]",
            "gallery[]",
            "sponsors[]",
            "basic_naira",
            "basic_usd",
            "basic_package",
            "premium_naira",
            "premium_usd",
            "premium_package",
            "standard_naira",
            "standard_usd",
            "standard_package",
            "speakers",
        ]
    );
    assert_eq!(step_two[0].text(), "abc123");
    assert_eq!(step_two[1].file_name.as_deref(), Some("g1.png"));
    assert_eq!(step_two[2].file_name.as_deref(), Some("g2.png"));
    assert_eq!(step_two[4].text(), "15000");
    assert_eq!(step_two[6].text(), "[]");
    assert_eq!(
        step_two[13].text(),
        r#"[{"speaker_id":7,"occupation":"Key Note Address"}]"#
    );
}

#[tokio::test]
async fn rejected_step_one_keeps_wizard_on_first_step() {
    let (base_url, log) = spawn_server().await;
    let (conn, notifier) = connection(&base_url);
    let mut wizard = conn.wizard();

    let draft = wizard.draft_mut();
    draft.set_basic(BasicInfoField::Title, "Taken Summit");
    draft.set_basic(BasicInfoField::Theme, "Assessment");
    draft.set_basic(BasicInfoField::Venue, "Abuja");
    draft.set_basic(BasicInfoField::Start, "2025-03-01");
    draft.set_basic(BasicInfoField::End, "2025-03-03");

    assert_eq!(wizard.next_step().await, SubmitOutcome::Failed);
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert!(wizard.correlation_token().is_none());
    assert_eq!(wizard.draft().basic.title, "Taken Summit");
    assert_eq!(notifier.taken(), vec![Notification::error("title taken")]);
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn edit_form_posts_complete_replacement() {
    let (base_url, log) = spawn_server().await;
    let (conn, notifier) = connection(&base_url);

    let conference: Conference = serde_json::from_value(json!({
        "id": 12,
        "title": "Edu Summit",
        "theme": "Assessment",
        "venue": "Abuja",
        "start": "2025-03-01",
        "end": "2025-03-03",
        "payments": {"basic": {"virtual": {"usd": "10", "naira": "15000"}}},
        "status": "draft"
    }))
    .unwrap();

    let mut form = conn.edit_form(&conference);
    form.workshops_mut().set_input("  Rubrics  ");
    form.workshops_mut().add_item();
    form.add_package_item("basic");
    form.update_package_item("basic", 0, "Lunch");
    assert_eq!(form.submit().await, SubmitOutcome::Succeeded);
    assert_eq!(
        notifier.taken(),
        vec![Notification::success("Conference updated successfully")]
    );

    form.set_field(BasicInfoField::Title, " ");
    assert_eq!(form.submit().await, SubmitOutcome::Invalid);
    assert_eq!(notifier.taken(), vec![Notification::error("Title is required")]);
    assert!(form.is_dirty());

    let log = log.lock().unwrap().clone();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].path, "/admin/edit_conference/12");
    assert_eq!(log[0].authorization.as_deref(), Some("Bearer secret-token"));
    let body = log[0].json.clone().unwrap();
    assert_eq!(body["workshops"], json!(["Rubrics"]));
    assert_eq!(body["payments"]["basic"]["package"], json!(["Lunch"]));
    assert_eq!(body["payments"]["basic"]["virtual"]["naira"], json!("15000"));
    assert_eq!(body["status"], json!("draft"));
}

#[tokio::test]
async fn non_success_status_carries_body_message() {
    let (base_url, _log) = spawn_server().await;
    let adapter = signed_in_adapter(&base_url);

    assert_eq!(
        adapter.get_json("/admin/fails_with_message").await.unwrap_err(),
        ApiError::HttpError {
            status: 422,
            message: Some("Venue is required".into()),
        }
    );
    assert_eq!(
        adapter.get_json("/admin/fails_with_html").await.unwrap_err(),
        ApiError::HttpError {
            status: 502,
            message: None,
        }
    );
}

#[tokio::test]
async fn non_json_success_body_is_a_parse_error() {
    let (base_url, _log) = spawn_server().await;
    let adapter = signed_in_adapter(&base_url);

    assert!(matches!(
        adapter.get_json("/admin/not_json").await,
        Err(ApiError::ParseError(_))
    ));
}

#[tokio::test]
async fn signed_out_session_sends_nothing() {
    let (base_url, log) = spawn_server().await;
    let adapter = HttpApiAdapter::new(&config(&base_url), Arc::new(SessionHandle::new()));

    assert_eq!(
        adapter.get_json("/admin/speakers_list").await.unwrap_err(),
        ApiError::MissingSession
    );
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_request_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let adapter = signed_in_adapter(&format!("http://{addr}/api"));
    assert!(matches!(
        adapter.get_json("/admin/speakers_list").await,
        Err(ApiError::RequestFailed(_))
    ));
}
