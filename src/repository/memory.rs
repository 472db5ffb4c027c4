use std::sync::Mutex;

use async_trait::async_trait;

use super::{RepositoryError, RepositoryResult, UsuarioRepository};
use crate::model::usuario::{Usuario, UsuarioInput};

/// Table stand-in for handler tests: serial ids, unique emails.
#[derive(Default)]
pub struct InMemoryUsuarioRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    rows: Vec<Usuario>,
    last_id: i32,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<Usuario> {
        self.state.lock().unwrap().rows.clone()
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn list(&self) -> RepositoryResult<Vec<Usuario>> {
        let mut rows = self.rows();
        rows.sort_by_key(|u| u.id);
        Ok(rows)
    }

    async fn create(&self, input: &UsuarioInput) -> RepositoryResult<Usuario> {
        let mut state = self.state.lock().unwrap();
        if state.rows.iter().any(|u| u.email == input.email) {
            return Err(RepositoryError::EmailTaken);
        }
        state.last_id += 1;
        let usuario = Usuario {
            id: state.last_id,
            nombre: input.nombre.clone(),
            email: input.email.clone(),
        };
        state.rows.push(usuario.clone());
        Ok(usuario)
    }

    async fn update(&self, id: i32, input: &UsuarioInput) -> RepositoryResult<Option<Usuario>> {
        let mut state = self.state.lock().unwrap();
        if state
            .rows
            .iter()
            .any(|u| u.id != id && u.email == input.email)
        {
            // Postgres reports this as a plain database error on UPDATE.
            return Err(RepositoryError::Database(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint".into(),
            )));
        }
        Ok(state.rows.iter_mut().find(|u| u.id == id).map(|u| {
            u.nombre = input.nombre.clone();
            u.email = input.email.clone();
            u.clone()
        }))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|u| u.id != id);
        Ok(state.rows.len() != before)
    }
}
