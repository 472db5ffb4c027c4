use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Row of the usuarios table, also the response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
}

// Body for both create and update
#[derive(Debug, Default, Deserialize)]
pub struct UsuarioPayload {
    pub nombre: Option<String>,
    pub email: Option<String>,
}

/// A payload that passed validation: both fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsuarioInput {
    pub nombre: String,
    pub email: String,
}

impl UsuarioPayload {
    pub fn validate(self) -> Option<UsuarioInput> {
        let nombre = self.nombre.filter(|s| !s.is_empty())?;
        let email = self.email.filter(|s| !s.is_empty())?;
        Some(UsuarioInput { nombre, email })
    }
}
