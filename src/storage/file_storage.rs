use std::path::PathBuf;

use anyhow::Result;
use tokio::fs;

use crate::config::AppSettings;

pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn settings_path(&self) -> PathBuf {
        self.base.join("settings.json")
    }
}

#[async_trait::async_trait(?Send)]
impl super::Storage for FileStorage {
    async fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        fs::create_dir_all(&self.base).await?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(self.settings_path(), json).await?;
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<AppSettings>> {
        match fs::read_to_string(self.settings_path()).await {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.load_settings().await.unwrap(), None);
    }

    #[tokio::test]
    async fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        // Nested path that does not exist yet.
        let storage = FileStorage::new(dir.path().join("config"));
        let settings = AppSettings {
            api_base: "https://advisor.example.com/prod".into(),
        };
        storage.save_settings(&settings).await.unwrap();
        assert_eq!(storage.load_settings().await.unwrap(), Some(settings));
    }
}
