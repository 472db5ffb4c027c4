use async_trait::async_trait;
use sqlx::PgPool;

use super::{RepositoryError, RepositoryResult, UsuarioRepository};
use crate::model::usuario::{Usuario, UsuarioInput};

// SQLSTATE unique_violation
const UNIQUE_VIOLATION: &str = "23505";

pub struct PgUsuarioRepository {
    pool: PgPool,
}

impl PgUsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn list(&self) -> RepositoryResult<Vec<Usuario>> {
        let rows = sqlx::query_as::<_, Usuario>("SELECT id, nombre, email FROM usuarios ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, input: &UsuarioInput) -> RepositoryResult<Usuario> {
        sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (nombre, email) VALUES ($1, $2) RETURNING id, nombre, email",
        )
        .bind(&input.nombre)
        .bind(&input.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::EmailTaken
            } else {
                RepositoryError::Database(e)
            }
        })
    }

    async fn update(&self, id: i32, input: &UsuarioInput) -> RepositoryResult<Option<Usuario>> {
        let row = sqlx::query_as::<_, Usuario>(
            "UPDATE usuarios SET nombre = $1, email = $2 WHERE id = $3 RETURNING id, nombre, email",
        )
        .bind(&input.nombre)
        .bind(&input.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
