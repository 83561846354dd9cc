use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::error::ApiError;
use crate::registro::dto::{RegistrarRequest, RegistroResponse};
use crate::registro::repo_types::{NovoUsuario, Usuario};
use crate::registro::{password, token};
use crate::state::AppState;

pub fn registro_routes() -> Router<AppState> {
    Router::new().route("/api/registrar", post(registrar))
}

#[instrument(skip(state, payload))]
pub async fn registrar(
    State(state): State<AppState>,
    Json(payload): Json<RegistrarRequest>,
) -> Result<Json<RegistroResponse>, ApiError> {
    let registro = payload.validate()?;

    let db = state.db()?;

    // Best-effort duplicate check; two concurrent registrations can both
    // pass it, and the loser of the insert race gets the same 400 from the
    // unique constraint.
    let existente = Usuario::find_by_email(db, &registro.email)
        .await
        .map_err(|e| {
            error!(error = %e, "find_by_email failed");
            ApiError::from(e)
        })?;
    if existente.is_some() {
        warn!(email = %registro.email, "email already registered");
        return Err(ApiError::Conflict("email already registered"));
    }

    let senha_hash = password::hash(&registro.senha).map_err(|e| {
        error!(error = %e, "hash senha failed");
        ApiError::Internal(e.into())
    })?;
    let token_confirmacao = token::generate();

    let novo = NovoUsuario {
        nome: registro.nome,
        email: registro.email,
        senha_hash,
        foto: registro.foto,
        tipo_usuario: registro.tipo_usuario,
        token_confirmacao,
    };

    let usuario = Usuario::insert(db, &novo).await.map_err(|e| {
        error!(error = %e, "insert usuario failed");
        ApiError::from(e)
    })?;

    info!(usuario_id = %usuario.id, email = %usuario.email, "usuario registrado");
    Ok(Json(RegistroResponse {
        success: true,
        message: "account created, confirm by email",
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::build_app;
    use crate::state::AppState;

    async fn post_registrar(body: Value) -> (StatusCode, Value) {
        let app = build_app(AppState::fake());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/registrar")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_fields_answer_400_with_error_body() {
        let (status, body) = post_registrar(json!({
            "nome": "Maria Silva",
            "email": "maria@example.com"
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("missing required fields"));
    }

    #[tokio::test]
    async fn empty_object_answers_400() {
        let (status, body) = post_registrar(json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("missing required fields"));
    }

    #[tokio::test]
    async fn blank_required_field_answers_400() {
        let (status, _) = post_registrar(json!({
            "nome": "Maria Silva",
            "email": "maria@example.com",
            "senha": "   ",
            "tipo_usuario": "aluno"
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_request_without_database_answers_500() {
        let (status, body) = post_registrar(json!({
            "nome": "Maria Silva",
            "email": "maria@example.com",
            "senha": "segredo123",
            "tipo_usuario": "aluno"
        }))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("internal error"));
    }
}
