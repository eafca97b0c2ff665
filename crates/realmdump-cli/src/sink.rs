//! Concrete page sinks.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use realmdump_core::error::SinkError;
use realmdump_core::{PageSink, Result, UserPage};

/// Sink that writes each page to a file in a directory.
///
/// A page is staged to a `.tmp` file on emit and renamed to its final
/// `users-<offset>.json` name on commit, so a crash mid-page never
/// leaves a half-written final file behind.
pub struct DirSink {
    dir: PathBuf,
    staged: Option<Staged>,
}

struct Staged {
    tmp: PathBuf,
    target: PathBuf,
}

impl DirSink {
    /// Create the sink, creating the directory if needed.
    pub async fn create(dir: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(SinkError::from)?;
        Ok(Self { dir, staged: None })
    }
}

#[async_trait]
impl PageSink for DirSink {
    async fn emit(&mut self, page: &UserPage) -> Result<()> {
        let name = format!("users-{:08}.json", page.offset);
        let target = self.dir.join(&name);
        let tmp = self.dir.join(format!("{name}.tmp"));

        tokio::fs::write(&tmp, &page.body)
            .await
            .map_err(SinkError::from)?;
        self.staged = Some(Staged { tmp, target });
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        let staged = self
            .staged
            .take()
            .ok_or_else(|| SinkError::message("commit without a staged page"))?;

        tokio::fs::rename(&staged.tmp, &staged.target)
            .await
            .map_err(SinkError::from)?;
        debug!(path = %staged.target.display(), "page written");
        Ok(())
    }
}

/// Sink that writes each page to stdout, one JSON array per line.
#[derive(Default)]
pub struct StdoutSink {
    staged: Option<Vec<u8>>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageSink for StdoutSink {
    async fn emit(&mut self, page: &UserPage) -> Result<()> {
        self.staged = Some(page.body.clone());
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        let body = self
            .staged
            .take()
            .ok_or_else(|| SinkError::message("commit without a staged page"))?;

        let mut stdout = tokio::io::stdout();
        stdout.write_all(&body).await.map_err(SinkError::from)?;
        stdout.write_all(b"\n").await.map_err(SinkError::from)?;
        stdout.flush().await.map_err(SinkError::from)?;
        Ok(())
    }
}
