use std::path::Path;

use axum::{extract::Extension, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::repository::DynUsuarioRepository;

pub mod usuarios;

use usuarios::usuarios_router;

pub fn app(repo: DynUsuarioRepository, public_dir: impl AsRef<Path>) -> Router {
    let static_files = ServeDir::new(public_dir);

    Router::new()
        .merge(usuarios_router(static_files.clone()))
        // Anything that is not an API route is a static file
        .fallback_service(static_files)
        .layer(Extension(repo))
        .layer(TraceLayer::new_for_http())
}
