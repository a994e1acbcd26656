use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use client::{ApiClient, SessionStore, TokenStore};
use serde_json::{json, Value};
use shared_types::ApiConfig;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub const USERNAME: &str = "jdoe";
pub const PASSWORD: &str = "secret123";
pub const TOKEN: &str = "tok-jdoe";

/// Counters and switches shared between a test and its mock server.
#[derive(Default)]
pub struct MockState {
    profile_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    logout_fails: AtomicBool,
}

/// An in-process stand-in for the school REST API, listening on an
/// ephemeral localhost port for the lifetime of the test runtime.
pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let router = Router::new()
            .route("/api/auth/login/", post(login))
            .route("/api/auth/register/", post(register))
            .route("/api/auth/logout/", post(logout))
            .route("/api/users/profile/", get(profile))
            .route("/api/assignments/", get(assignments))
            .route("/api/subjects/", get(subjects))
            .route("/api/classes/", get(classes))
            .route("/api/students/", get(students))
            .route("/api/dashboard/", get(dashboard))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().expect("Mock API has no address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock API stopped");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    /// A session store talking to this server and persisting into `tokens`.
    pub fn store(&self, tokens: Arc<dyn TokenStore>) -> SessionStore {
        let api = ApiClient::new(&ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        })
        .expect("Failed to build API client");
        SessionStore::new(api, tokens)
    }

    pub fn profile_calls(&self) -> usize {
        self.state.profile_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.state.logout_calls.load(Ordering::SeqCst)
    }

    /// Make `POST /auth/logout/` answer 500 from now on.
    pub fn fail_logout(&self) {
        self.state.logout_fails.store(true, Ordering::SeqCst);
    }
}

/// The profile the mock returns for the seeded account.
pub fn student_json() -> Value {
    json!({
        "id": 42,
        "username": USERNAME,
        "email": "jdoe@example.org",
        "first_name": "Jane",
        "last_name": "Doe",
        "role": 3,
        "phone_number": "555-0100"
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Token {}", TOKEN))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Invalid token." })),
    )
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    if username == USERNAME && password == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({ "token": TOKEN, "user": student_json() })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "non_field_errors": ["Unable to log in with provided credentials."] })),
        )
    }
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["username"] == USERNAME {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "username": ["A user with that username already exists."] })),
        );
    }

    let user = json!({
        "id": 43,
        "username": body["username"],
        "email": body["email"],
        "first_name": body["first_name"],
        "last_name": body["last_name"],
        "role": body["role"],
    });
    (
        StatusCode::CREATED,
        Json(json!({ "token": "tok-new", "user": user })),
    )
}

async fn logout(State(state): State<Arc<MockState>>) -> StatusCode {
    state.logout_calls.fetch_add(1, Ordering::SeqCst);
    if state.logout_fails.load(Ordering::SeqCst) {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

async fn profile(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.profile_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(student_json()))
}

/// Paginated envelope.
async fn assignments(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                { "id": 1, "title": "Essay" },
                { "id": 2, "title": "Lab Report" }
            ]
        })),
    )
}

/// Bare array.
async fn subjects(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!([
            { "id": 1, "name": "Mathematics", "code": "MATH101", "credits": 3 },
            { "id": 2, "name": "Chemistry", "code": "CHEM201", "credits": 4 }
        ])),
    )
}

/// Nullable columns left empty, the way Django serializes them.
async fn classes(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {
                    "id": 1,
                    "name": "Grade 10A",
                    "subject": { "id": 1, "name": "Mathematics", "code": "MATH101", "description": null },
                    "teacher": {
                        "id": 5,
                        "user": { "id": 9, "first_name": "Ada", "last_name": "Lovelace", "email": null },
                        "employee_id": "T-5",
                        "department": null,
                        "experience_years": null,
                        "hire_date": null
                    },
                    "room_number": null,
                    "schedule_time": null,
                    "max_capacity": 30,
                    "student_count": null
                },
                {
                    "id": 2,
                    "name": "Grade 11B",
                    "subject": null,
                    "teacher": { "id": 6, "user": null },
                    "room_number": "B12",
                    "max_capacity": null,
                    "student_count": 18
                }
            ]
        })),
    )
}

async fn students() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "Something went wrong" })),
    )
}

async fn dashboard(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "enrolled_classes": 4,
            "pending_assignments": 2,
            "average_grade": "87.5",
            "attendance_rate": 96.0
        })),
    )
}
