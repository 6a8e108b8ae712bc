//! Image attachment handling for card payloads.
//!
//! An optional binary upload rides along with a card submission. Accepted
//! files are written under the image root and the payload's `img_name` is
//! rewritten to the resulting relative path before validation runs.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};
use crate::models::CardDraft;

pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];
pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// URL prefix the image root is served under.
pub const IMAGE_URL_PREFIX: &str = "images";

static UPLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

/// A binary image submitted alongside a card payload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Writes accepted uploads under a root directory.
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Create the store, creating the root directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        std::fs::create_dir_all(root.as_ref())?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Materialize an optional upload into the payload.
    ///
    /// Without an upload the draft passes through unchanged. With one, the
    /// file type is checked against the allow-list by both extension and
    /// declared MIME type; a failed check is an
    /// [`Error::InvalidUpload`](crate::Error::InvalidUpload) and nothing is
    /// written. Accepted files land at `<root>/<millis>-<seq>.<ext>` and
    /// `img_name` is rewritten to `images/<file>`.
    pub async fn attach(
        &self,
        mut draft: CardDraft,
        upload: Option<ImageUpload>,
    ) -> Result<CardDraft> {
        let Some(upload) = upload else {
            return Ok(draft);
        };
        let ext = check_allowed(&upload)?;
        let file_name = unique_name(&ext);
        tokio::fs::write(self.root.join(&file_name), &upload.data).await?;
        draft.img_name = Some(format!("{IMAGE_URL_PREFIX}/{file_name}"));
        Ok(draft)
    }
}

fn check_allowed(upload: &ImageUpload) -> Result<String> {
    let ext = Path::new(&upload.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(Error::InvalidUpload(format!(
            "file extension '.{ext}' is not allowed (expected one of {})",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }
    let mime = upload.content_type.to_ascii_lowercase();
    if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(Error::InvalidUpload(format!(
            "content type '{}' is not allowed",
            upload.content_type
        )));
    }
    Ok(ext)
}

/// Timestamp plus a process-wide counter: unique per call, so a write can
/// never clobber an existing file.
fn unique_name(ext: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = UPLOAD_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}.{ext}")
}
