//! Integration tests for the questionnaire, diagnoses, dashboard and
//! population overview.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{moderate_answers, TestApp};

#[tokio::test]
async fn questions_are_listed_in_id_order() {
    let app = TestApp::new().await;

    let response = app.get("/api/perguntas", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let questions = response.body.as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["id"], json!(1));
    assert_eq!(questions[1]["id"], json!(2));
    assert_eq!(questions[0]["opcoes"][0]["pontuacao"], json!(10));
}

#[tokio::test]
async fn diagnosis_is_scored_and_classified() {
    let app = TestApp::new().await;
    let (_, cookie) = app.register("Ana", "ana@example.com").await;

    let response = app
        .post("/api/diagnostico", Some(&cookie), moderate_answers())
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["diagnostico"]["pontuacao"], json!(18));
    assert_eq!(response.body["diagnostico"]["nivel"], json!("Moderado"));
    assert_eq!(response.body["solucoes"].as_array().unwrap().len(), 8);
    assert_eq!(app.store.diagnosis_count().await, 1);
}

#[tokio::test]
async fn diagnosis_requires_session() {
    let app = TestApp::new().await;

    let response = app.post("/api/diagnostico", None, moderate_answers()).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.diagnosis_count().await, 0);
}

#[tokio::test]
async fn malformed_answer_is_rejected_without_storing() {
    let app = TestApp::new().await;
    let (_, cookie) = app.register("Ana", "ana@example.com").await;

    let response = app
        .post(
            "/api/diagnostico",
            Some(&cookie),
            json!({"respostas": [{"pontuacao": 4}, {"pontuacao": "muito"}]}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["campo"], json!("respostas"));
    assert_eq!(app.store.diagnosis_count().await, 0);
}

#[tokio::test]
async fn empty_submission_scores_zero() {
    let app = TestApp::new().await;
    let (_, cookie) = app.register("Ana", "ana@example.com").await;

    let response = app
        .post("/api/diagnostico", Some(&cookie), json!({"respostas": []}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["diagnostico"]["pontuacao"], json!(0));
    assert_eq!(response.body["diagnostico"]["nivel"], json!("Não dependente"));
}

#[tokio::test]
async fn recommendations_by_label() {
    let app = TestApp::new().await;

    let known = app.get("/api/solucoes/Dependente", None).await;
    assert_eq!(known.status, StatusCode::OK);
    assert_eq!(known.body["nivel"], json!("Dependente"));
    assert_eq!(known.body["solucoes"].as_array().unwrap().len(), 8);

    let unknown = app.get("/api/solucoes/Viciado", None).await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(unknown.body["solucoes"], json!([]));
}

#[tokio::test]
async fn tip_of_the_day_works_anonymously() {
    let app = TestApp::new().await;

    let response = app.get("/api/dica-do-dia", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body["dica"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_before_first_diagnosis_asks_for_one() {
    let app = TestApp::new().await;
    let (id, cookie) = app.register("Ana", "ana@example.com").await;

    let response = app.get("/api/dashboard-data", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["usuario"]["id"], json!(id));
    assert!(response.body["usuario"].get("senha").is_none());
    assert_eq!(response.body["ultimo_diagnostico"], json!(null));
    assert_eq!(response.body["historico"], json!([]));
    assert_eq!(response.body["precisa_reavaliar"], json!(true));
    assert_eq!(response.body["familia_data"]["total_membros"], json!(1));
}

#[tokio::test]
async fn dashboard_after_diagnosis_shows_latest() {
    let app = TestApp::new().await;
    let (_, cookie) = app.register("Ana", "ana@example.com").await;
    app.post("/api/diagnostico", Some(&cookie), moderate_answers())
        .await;

    let response = app.get("/api/dashboard-data", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    let latest = &response.body["ultimo_diagnostico"];
    assert_eq!(latest["pontuacao"], json!(18));
    assert_eq!(latest["nivel"], json!("Moderado"));
    assert_eq!(latest["respostas"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["historico"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["precisa_reavaliar"], json!(false));
    assert_eq!(
        response.body["familia_data"]["nivel_predominante"],
        json!("Moderado")
    );
}

#[tokio::test]
async fn population_overview_marks_the_caller() {
    let app = TestApp::new().await;
    let (ana, cookie) = app.register("Ana", "ana@example.com").await;
    app.register("Bruno", "bruno@example.com").await;
    app.post("/api/diagnostico", Some(&cookie), moderate_answers())
        .await;

    let response = app.get("/api/avaliacao-geral/dados", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    let stats = &response.body["estatisticas"];
    assert_eq!(stats["total_usuarios"], json!(2));
    assert_eq!(stats["total_avaliados"], json!(1));
    assert_eq!(stats["nivel_mais_comum"], json!("Moderado"));
    assert_eq!(response.body["usuario_logado_id"], json!(ana));
    assert_eq!(response.body["modo_demo"], json!(false));

    let details = response.body["detalhes"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    let marked: Vec<_> = details
        .iter()
        .filter(|d| d["is_usuario_logado"] == json!(true))
        .collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0]["pontuacao"], json!(18));
}

#[tokio::test]
async fn population_overview_is_public() {
    let app = TestApp::new().await;
    app.register("Ana", "ana@example.com").await;

    let response = app.get("/api/avaliacao-geral/dados", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["usuario_logado_id"], json!(null));
    assert_eq!(response.body["estatisticas"]["total_avaliados"], json!(0));
}
