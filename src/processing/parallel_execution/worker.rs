// Worker - 1タスク分のリネーム処理

use crate::core::{base_name, EntryKind, RenameOutcome, RenameTask};
use crate::storage::FileSystemBackend;

/// 1件のリネームタスクを処理し、必ず1つの結果を返す
///
/// 失敗はすべて `RenameOutcome` に変換され、呼び出し元へは伝播しない。
pub async fn process_rename<B>(backend: &B, task: &RenameTask, create_dest_dirs: bool) -> RenameOutcome
where
    B: FileSystemBackend + ?Sized,
{
    let source_name = base_name(&task.source_path);

    let kind = match backend.probe(&task.source_path).await {
        Ok(Some(kind)) => Some(kind),
        Ok(None) => return RenameOutcome::NotFound { source_name },
        // 存在しないと確定できないstat失敗はrenameの結果に任せる
        Err(_) => None,
    };

    if create_dest_dirs {
        if let Err(error) = backend.create_parent_dirs(&task.dest_path).await {
            return RenameOutcome::Failed {
                source_name,
                error: format!("{error:#}"),
            };
        }
    }

    if let Err(error) = backend.rename(&task.source_path, &task.dest_path).await {
        return RenameOutcome::Failed {
            source_name,
            error: format!("{error:#}"),
        };
    }

    RenameOutcome::Renamed {
        kind: kind.unwrap_or(EntryKind::File),
        source_name,
        dest_name: base_name(&task.dest_path),
    }
}
