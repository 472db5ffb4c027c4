use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Json, Path,
    },
    http::StatusCode,
    routing::{get, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::error::{ApiError, ApiResult};
use crate::model::usuario::{Usuario, UsuarioInput, UsuarioPayload};
use crate::repository::{DynUsuarioRepository, RepositoryError};

const LIST_FAILED: &str = "Error al obtener usuarios";
const CREATE_FAILED: &str = "Error al crear usuario";
const UPDATE_FAILED: &str = "Error al actualizar usuario";
const DELETE_FAILED: &str = "Error al eliminar usuario";

// Trailing slashes are accepted; other methods on these paths fall through to the static files.
pub fn usuarios_router(static_files: ServeDir) -> Router {
    let collection = || {
        get(list_usuarios)
            .post(create_usuario)
            .fallback_service(static_files.clone())
    };
    let member = || {
        put(update_usuario)
            .delete(delete_usuario)
            .fallback_service(static_files.clone())
    };

    Router::new()
        .route("/usuarios", collection())
        .route("/usuarios/", collection())
        .route("/usuarios/:id", member())
        .route("/usuarios/:id/", member())
}

// An id that does not fit the id column fails the same way a bad cast in the query would.
fn parse_id(path: Result<Path<i32>, PathRejection>, failure: &'static str) -> ApiResult<i32> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::error!("Invalid usuario id: {}", rejection);
        ApiError::Internal(failure)
    })
}

fn parse_input(body: Result<Json<UsuarioPayload>, JsonRejection>) -> ApiResult<UsuarioInput> {
    let Json(payload) = body.map_err(|rejection| {
        tracing::debug!("Rejected usuario body: {}", rejection);
        ApiError::Validation
    })?;
    payload.validate().ok_or(ApiError::Validation)
}

// GET /usuarios
async fn list_usuarios(
    Extension(repo): Extension<DynUsuarioRepository>,
) -> ApiResult<Json<Vec<Usuario>>> {
    let usuarios = repo.list().await.map_err(|e| {
        tracing::error!("Failed to list usuarios: {}", e);
        ApiError::Internal(LIST_FAILED)
    })?;
    Ok(Json(usuarios))
}

// POST /usuarios
async fn create_usuario(
    Extension(repo): Extension<DynUsuarioRepository>,
    body: Result<Json<UsuarioPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Usuario>)> {
    let input = parse_input(body)?;

    match repo.create(&input).await {
        Ok(usuario) => {
            tracing::info!("Created usuario {}", usuario.id);
            Ok((StatusCode::CREATED, Json(usuario)))
        }
        Err(RepositoryError::EmailTaken) => {
            tracing::warn!("Email already exists: {}", input.email);
            Err(ApiError::EmailTaken)
        }
        Err(e) => {
            tracing::error!("Failed to create usuario: {}", e);
            Err(ApiError::Internal(CREATE_FAILED))
        }
    }
}

// PUT /usuarios/:id
async fn update_usuario(
    Extension(repo): Extension<DynUsuarioRepository>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<UsuarioPayload>, JsonRejection>,
) -> ApiResult<Json<Usuario>> {
    // Body is checked before the id
    let input = parse_input(body)?;
    let id = parse_id(path, UPDATE_FAILED)?;

    // Unlike create, a duplicate email here is reported as a server error.
    let updated = repo.update(id, &input).await.map_err(|e| {
        tracing::error!("Failed to update usuario {}: {}", id, e);
        ApiError::Internal(UPDATE_FAILED)
    })?;

    updated.map(Json).ok_or(ApiError::NotFound)
}

// DELETE /usuarios/:id
async fn delete_usuario(
    Extension(repo): Extension<DynUsuarioRepository>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(path, DELETE_FAILED)?;

    let deleted = repo.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete usuario {}: {}", id, e);
        ApiError::Internal(DELETE_FAILED)
    })?;

    if deleted {
        tracing::info!("Deleted usuario {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
