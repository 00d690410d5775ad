use std::path::Path;

use anyhow::Context;

/// Writes `contents` through a sibling temp file plus rename, so a crash
/// mid-write never leaves a half-written record behind.
pub(crate) async fn atomic_write(path: &Path, contents: &str) -> anyhow::Result<()> {
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, contents)
        .await
        .with_context(|| format!("write temp file failed: {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("replace file failed: {}", path.display()))?;
    Ok(())
}
