use crate::errors::JournalError;
use crate::models::JournalData;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("JOURNAL_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/journal.json")
}

pub async fn load_data(path: &Path) -> JournalData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse journal file: {err}");
                JournalData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => JournalData::default(),
        Err(err) => {
            error!("failed to read journal file: {err}");
            JournalData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &JournalData) -> Result<(), JournalError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_prefers_the_env_override() {
        // Both branches in one test; no other test touches the variable.
        unsafe { env::set_var("JOURNAL_DATA_PATH", "/tmp/journal-override.json") };
        assert_eq!(
            resolve_data_path(),
            PathBuf::from("/tmp/journal-override.json")
        );

        unsafe { env::remove_var("JOURNAL_DATA_PATH") };
        assert_eq!(resolve_data_path(), PathBuf::from("data/journal.json"));
    }
}
