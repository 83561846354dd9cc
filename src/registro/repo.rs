use sqlx::PgPool;

use crate::registro::repo_types::{NovoUsuario, Usuario};

impl Usuario {
    /// Find a user by email. Used for best-effort duplicate detection; the
    /// unique constraint on `usuarios.email` is the source of truth.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<Usuario>, sqlx::Error> {
        sqlx::query_as::<_, Usuario>(
            r#"
            SELECT id, nome, email, senha_hash, foto, pontos, online,
                   tipo_usuario, confirmado, token_confirmacao, criado_em
            FROM usuarios
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user in a single statement. pontos, online and
    /// confirmado always start at their fixed defaults.
    pub async fn insert(db: &PgPool, novo: &NovoUsuario) -> Result<Usuario, sqlx::Error> {
        sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios
                (nome, email, senha_hash, foto, pontos, online, tipo_usuario, confirmado, token_confirmacao)
            VALUES ($1, $2, $3, $4, 0, FALSE, $5, FALSE, $6)
            RETURNING id, nome, email, senha_hash, foto, pontos, online,
                      tipo_usuario, confirmado, token_confirmacao, criado_em
            "#,
        )
        .bind(&novo.nome)
        .bind(&novo.email)
        .bind(&novo.senha_hash)
        .bind(novo.foto.as_deref())
        .bind(&novo.tipo_usuario)
        .bind(&novo.token_confirmacao)
        .fetch_one(db)
        .await
    }
}
