use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the `usuarios` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub senha_hash: String, // argon2 PHC string, not exposed in JSON
    pub foto: Option<String>,
    pub pontos: i32,
    pub online: bool,
    pub tipo_usuario: String,
    pub confirmado: bool,
    #[serde(skip_serializing)]
    pub token_confirmacao: String, // consumed by the confirmation flow
    pub criado_em: OffsetDateTime,
}

/// Fields supplied by the registration flow. Everything else in the row
/// (id, pontos, online, confirmado, criado_em) starts at a fixed default.
#[derive(Debug)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub foto: Option<String>,
    pub tipo_usuario: String,
    pub token_confirmacao: String,
}
