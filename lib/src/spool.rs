//! One-request upload spool.
//!
//! Career submissions land here before being attached to the outgoing
//! message. Files are written under a UUID-prefixed name, so concurrent
//! requests cannot collide; no locking is needed. The directory is
//! created lazily on first save.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::email::StoredAttachment;
use crate::error::Error;

pub struct Spool {
    dir: PathBuf,
}

impl Spool {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist an uploaded file and return its spool entry.
    pub async fn save(&self, name: &str, data: &[u8]) -> Result<StoredAttachment, Error> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let name = sanitize(name);
        let path = self.dir.join(format!("{}_{}", Uuid::new_v4(), name));

        tokio::fs::write(&path, data).await?;

        log::debug!("Spooled {} ({} bytes) to {:?}", name, data.len(), path);

        let mime = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(StoredAttachment { name, path, mime })
    }

    /// Best-effort removal after the send attempt. Failure is logged
    /// and never surfaced to the client.
    pub async fn remove(&self, attachment: &StoredAttachment) {
        if let Err(e) = tokio::fs::remove_file(&attachment.path).await {
            log::warn!("Failed to remove spooled file {:?}: {}", attachment.path, e);
        }
    }
}

/// Strip any path components from a client-supplied file name.
fn sanitize(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if base.is_empty() {
        "upload".to_string()
    } else {
        base
    }
}
