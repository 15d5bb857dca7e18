//! src/source/loader.rs
//! ============================================================================
//! # Catalog loader
//!
//! One best-effort fetch at startup. No retry, no timeout; a failure is
//! final for the session.

use std::time::Instant;

use tokio::{fs as TokioFs, sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, error, info, instrument};

use crate::{
    controller::event_loop::TaskResult,
    error::{AppError, LoadFailure},
    model::entry::Catalog,
    source::catalog_source::CatalogSource,
};

/// Fetch and decode the catalog.
#[instrument(level = "debug", skip(source), fields(source = %source))]
pub async fn load_catalog(source: &CatalogSource) -> Result<Catalog, AppError> {
    let location = source.to_string();
    let bytes = fetch_bytes(source)
        .await
        .map_err(|cause| AppError::load_failed(&location, cause))?;

    Catalog::from_json(&bytes).map_err(|cause| AppError::load_failed(&location, cause))
}

async fn fetch_bytes(source: &CatalogSource) -> Result<Vec<u8>, LoadFailure> {
    match source {
        CatalogSource::File(path) => Ok(TokioFs::read(path).await?),
        CatalogSource::Http(url) => {
            let response = reqwest::get(url.clone()).await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
    }
}

/// Run [`load_catalog`] in the background and report on `task_tx`.
pub fn spawn_catalog_load(
    source: CatalogSource,
    task_tx: UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start = Instant::now();
        let result = load_catalog(&source).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(catalog) => info!(
                "Loaded {} entries from {} in {}ms",
                catalog.len(),
                source,
                elapsed.as_millis()
            ),
            Err(_) => debug!("Catalog load failed after {}ms", elapsed.as_millis()),
        }

        if task_tx
            .send(TaskResult::CatalogLoaded { result, elapsed })
            .is_err()
        {
            error!("Catalog load finished after the event loop shut down");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::mpsc,
    };

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = write_temp(
            r#"[{"name":"Redis","description":"Cache","category":"Database","url":"https://github.com/redis"}]"#,
        );
        let source = CatalogSource::File(file.path().to_path_buf());

        let catalog = load_catalog(&source).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().category, "Database");
    }

    #[tokio::test]
    async fn test_bundled_sample_catalog_loads() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../static/data/servers.json");

        let catalog = load_catalog(&CatalogSource::File(path)).await.unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|e| !e.name.is_empty() && !e.url.is_empty()));
    }

    #[tokio::test]
    async fn test_missing_file_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::File(dir.path().join("servers.json"));

        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::LoadFailed {
                cause: LoadFailure::Io(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_is_load_failure() {
        let file = write_temp("[{\"name\": ");
        let source = CatalogSource::File(file.path().to_path_buf());

        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::LoadFailed {
                cause: LoadFailure::Parse(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_unreachable_http_source_is_load_failure() {
        // Port 9 (discard) on localhost; nothing should be listening.
        let source: CatalogSource = "http://127.0.0.1:9/servers.json".parse().unwrap();

        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::LoadFailed {
                cause: LoadFailure::Http(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_http_error_status_is_load_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0_u8; 1024];
            let _ = socket.read(&mut request).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await
                .unwrap();
        });

        let source: CatalogSource = format!("http://{addr}/static/data/servers.json")
            .parse()
            .unwrap();
        let err = load_catalog(&source).await.unwrap_err();

        match err {
            AppError::LoadFailed {
                cause: LoadFailure::Http(e),
                ..
            } => assert_eq!(e.status(), Some(reqwest::StatusCode::NOT_FOUND)),
            other => panic!("unexpected error: {other}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_spawned_load_reports_result() {
        let file = write_temp("[]");
        let (task_tx, mut task_rx) = mpsc::unbounded_channel();

        spawn_catalog_load(CatalogSource::File(file.path().to_path_buf()), task_tx)
            .await
            .unwrap();

        match task_rx.recv().await {
            Some(TaskResult::CatalogLoaded { result, .. }) => {
                assert!(result.unwrap().is_empty());
            }
            None => panic!("no task result"),
        }
    }
}
