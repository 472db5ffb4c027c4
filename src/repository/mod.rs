use std::sync::Arc;

use async_trait::async_trait;

use crate::model::usuario::{Usuario, UsuarioInput};

#[cfg(test)]
pub mod memory;
mod postgres;

pub use postgres::PgUsuarioRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Email already exists")]
    EmailTaken,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Each method is a single statement against the `usuarios` table.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UsuarioRepository: Send + Sync {
    /// All rows ordered by ascending id.
    async fn list(&self) -> RepositoryResult<Vec<Usuario>>;
    /// Returns `EmailTaken` when the email collides with an existing row.
    async fn create(&self, input: &UsuarioInput) -> RepositoryResult<Usuario>;
    /// `None` when no row has this id. Constraint violations come back as `Database`.
    async fn update(&self, id: i32, input: &UsuarioInput) -> RepositoryResult<Option<Usuario>>;
    /// `false` when no row has this id.
    async fn delete(&self, id: i32) -> RepositoryResult<bool>;
}

pub type DynUsuarioRepository = Arc<dyn UsuarioRepository>;
