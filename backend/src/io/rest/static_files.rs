//! Serving of the built single-page application.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Files from `static_dir`, with `index.html` answering every path that does
/// not match a file so client-side routes load the app shell.
pub fn spa_service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}
