use crate::core::EntryKind;
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod local;

/// リネーム処理が使うファイルシステム操作のトレイト
#[automock]
#[async_trait]
pub trait FileSystemBackend: Send + Sync {
    /// パスをstatして種別を返す。存在しなければ `Ok(None)`
    async fn probe(&self, path: &str) -> Result<Option<EntryKind>>;

    /// プラットフォームのrenameプリミティブでリネームする
    async fn rename(&self, source: &str, dest: &str) -> Result<()>;

    /// 移動先の親ディレクトリを作成する
    async fn create_parent_dirs(&self, dest: &str) -> Result<()>;
}

// FileSystemBackend for Box<dyn FileSystemBackend>
#[async_trait]
impl FileSystemBackend for Box<dyn FileSystemBackend> {
    async fn probe(&self, path: &str) -> Result<Option<EntryKind>> {
        self.as_ref().probe(path).await
    }

    async fn rename(&self, source: &str, dest: &str) -> Result<()> {
        self.as_ref().rename(source, dest).await
    }

    async fn create_parent_dirs(&self, dest: &str) -> Result<()> {
        self.as_ref().create_parent_dirs(dest).await
    }
}
