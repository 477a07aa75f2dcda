//! Shared harness for the HTTP integration tests.
//!
//! Builds the full router over `InMemoryStore` and real JWT sessions, and
//! drives it with `oneshot` requests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use netendencia::adapters::auth::JwtSessions;
use netendencia::adapters::http::{app_router, AppState, HttpSettings, Sessions, Stores};
use netendencia::adapters::memory::InMemoryStore;
use netendencia::domain::assessment::{AnswerOption, Classifier, Question};
use netendencia::domain::foundation::QuestionId;

const TEST_SECRET: &str = "integration-test-secret-that-is-long-enough";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    templates: TempDir,
}

/// Response status, headers and body. Non-JSON bodies parse as `Null`.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

impl TestResponse {
    /// `name=value` pair of the session cookie, when one was set.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("netendencia_session="))
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        store.seed_questions(questionnaire()).await;

        let templates = tempfile::tempdir().unwrap();
        std::fs::write(
            templates.path().join("index.html"),
            "<html><body>painel</body></html>",
        )
        .unwrap();
        std::fs::write(
            templates.path().join("landing.html"),
            "<html><body>bem-vindo</body></html>",
        )
        .unwrap();

        let sessions = Sessions::shared(Arc::new(JwtSessions::new(
            &SecretString::new(TEST_SECRET.to_string()),
            Duration::from_secs(3600),
        )));
        let settings = HttpSettings {
            reevaluation_days: 30,
            secure_cookie: false,
            templates_dir: templates.path().to_path_buf(),
        };
        let state = AppState::new(
            Stores::shared(store.clone()),
            sessions,
            Arc::new(Classifier::default()),
            settings,
        );

        Self {
            router: app_router(state),
            store,
            templates,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, cookie, None).await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, uri, cookie, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, cookie, None).await
    }

    /// Registers an account and returns its id with the session cookie.
    pub async fn register(&self, name: &str, email: &str) -> (i64, String) {
        let response = self
            .post(
                "/api/cadastrar",
                None,
                json!({"nome": name, "email": email, "senha": "segredo1", "idade": 34}),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
        let id = response.body["usuario_id"].as_i64().unwrap();
        let cookie = response.session_cookie().unwrap();
        (id, cookie)
    }
}

/// Answers worth 18 points in total, which is a Moderado result.
pub fn moderate_answers() -> Value {
    json!({
        "respostas": [
            {"pergunta_id": 1, "opcao_id": 11, "pontuacao": 10},
            {"pergunta_id": 2, "opcao_id": 22, "pontuacao": 8}
        ]
    })
}

fn questionnaire() -> Vec<Question> {
    let option = |id: i64, text: &str, points: i32| AnswerOption {
        id,
        text: text.to_string(),
        points,
    };
    vec![
        Question {
            id: QuestionId::from_i64(2),
            text: "Você usa o celular durante as refeições?".to_string(),
            category: Some("habitos".to_string()),
            options: vec![option(22, "Sempre", 8), option(21, "Nunca", 0)],
        },
        Question {
            id: QuestionId::from_i64(1),
            text: "Quantas horas por dia você passa online?".to_string(),
            category: Some("uso".to_string()),
            options: vec![option(11, "Mais de 6", 10), option(12, "Menos de 2", 1)],
        },
    ]
}
