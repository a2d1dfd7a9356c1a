//! Scene text input.

use super::SceneSource;
use scenesense::{ConfigError, DirectorError, DirectorErrorKind, SceneSenseResult};
use tokio::io::AsyncReadExt;
use tracing::debug;

impl SceneSource {
    /// Read the scene from `--scene`, `--file`, or stdin, in that order.
    pub async fn read(&self) -> SceneSenseResult<String> {
        let text = if let Some(scene) = &self.scene {
            scene.clone()
        } else if let Some(path) = &self.file {
            debug!(path = %path.display(), "Reading scene file");
            tokio::fs::read_to_string(path).await.map_err(|e| {
                ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
            })?
        } else {
            debug!("Reading scene from stdin");
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| ConfigError::new(format!("Failed to read stdin: {}", e)))?;
            buf
        };

        if text.trim().is_empty() {
            return Err(DirectorError::new(DirectorErrorKind::InvalidRequest(
                "scene text is empty".to_string(),
            ))
            .into());
        }
        Ok(text)
    }
}
