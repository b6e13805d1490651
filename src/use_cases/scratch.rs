use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

// Directory that holds per-request image files.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ensure(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }

    // Per-request variant of `ensure`; the root can vanish under tmp cleaners.
    pub async fn ensure_present(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    // Reserve a fresh, uniquely named path. Nothing is created on disk yet.
    pub fn allocate(&self) -> ScratchFile {
        let path = self.root.join(format!("qr-{}.img", Uuid::new_v4()));
        ScratchFile { path }
    }
}

// Owned scratch path; the file is removed when the guard drops.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to remove scratch file");
            }
        }
    }
}
