use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories following the XDG spec
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/ledge)
    pub config: PathBuf,

    /// Data directory (~/.local/share/ledge)
    pub data: PathBuf,

    /// Settings file path
    pub settings_file: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// # Panics
    ///
    /// Panics if the system's project directories cannot be determined.
    #[must_use]
    pub fn new() -> Self {
        let project =
            ProjectDirs::from("", "", "ledge").expect("Failed to determine project directories");

        let config = project.config_dir().to_path_buf();
        let data = project.data_dir().to_path_buf();

        Self {
            settings_file: config.join("settings.json"),
            config,
            data,
        }
    }

    /// Root everything under one base directory (used by tests).
    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            settings_file: base.join("settings.json"),
            config: base.clone(),
            data: base,
        }
    }

    /// Ensure all directories exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn ensure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)?;
        std::fs::create_dir_all(&self.data)?;
        Ok(())
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}
