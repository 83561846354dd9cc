use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Request body for `POST /api/registrar`. Every field is optional at the
/// wire level so a missing key surfaces as a validation error with the
/// agreed body shape instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RegistrarRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub foto: Option<String>,
    pub tipo_usuario: Option<String>,
}

/// A registration request that passed presence validation.
#[derive(Debug)]
pub struct NovoRegistro {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub foto: Option<String>,
    pub tipo_usuario: String,
}

/// Success body for `POST /api/registrar`. Failures share the
/// `{"success": false, "error": ...}` shape built by `ApiError`.
#[derive(Debug, Serialize)]
pub struct RegistroResponse {
    pub success: bool,
    pub message: &'static str,
}

impl RegistrarRequest {
    /// nome, email, senha and tipo_usuario must all be non-empty after
    /// trimming. foto stays optional; an empty foto collapses to null.
    pub fn validate(&self) -> Result<NovoRegistro, ApiError> {
        let (Some(nome), Some(email), Some(senha), Some(tipo_usuario)) = (
            required(self.nome.as_deref()),
            required(self.email.as_deref()),
            required(self.senha.as_deref()),
            required(self.tipo_usuario.as_deref()),
        ) else {
            return Err(ApiError::Validation("missing required fields"));
        };

        Ok(NovoRegistro {
            nome,
            email,
            senha,
            foto: required(self.foto.as_deref()),
            tipo_usuario,
        })
    }
}

fn required(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
