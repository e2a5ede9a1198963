use async_trait::async_trait;

use crate::config::AppSettings;

mod file_storage;

type AppStorage = file_storage::FileStorage;

#[async_trait(?Send)]
pub trait Storage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()>;
    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>>;
}

pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use directories_next::ProjectDirs;
    use std::path::PathBuf;

    let base = if let Some(proj_dirs) = ProjectDirs::from("dev", "finadvisor", "finadvisor") {
        proj_dirs.config_dir().to_path_buf()
        // Lin: /home/alice/.config/finadvisor
        // Win: C:\Users\Alice\AppData\Roaming\finadvisor\finadvisor\config
        // Mac: /Users/Alice/Library/Application Support/dev.finadvisor.finadvisor
    } else {
        PathBuf::from(".")
    };
    let storage = AppStorage::new(base);
    Ok(storage)
}
