use super::FileSystemBackend;
use crate::core::EntryKind;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;

/// ローカルファイルシステム用のバックエンド
///
/// stat・renameは `tokio::fs` 経由でブロッキングプール上で実行される。
#[derive(Clone, Debug)]
pub struct LocalFileSystem;

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystemBackend for LocalFileSystem {
    async fn probe(&self, path: &str) -> Result<Option<EntryKind>> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_dir() => Ok(Some(EntryKind::Folder)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("stat {path}")),
        }
    }

    async fn rename(&self, source: &str, dest: &str) -> Result<()> {
        // コピー+削除へのフォールバックはしない
        tokio::fs::rename(source, dest)
            .await
            .with_context(|| format!("rename {source} {dest}"))
    }

    async fn create_parent_dirs(&self, dest: &str) -> Result<()> {
        let parent = match Path::new(dest).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        };

        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("mkdir {}", parent.display()))
    }
}
