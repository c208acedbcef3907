//! Well-known discovery locations
//!
//! Every location the locator probes lives in a [`DiscoveryPaths`] value.
//! Only [`DiscoveryPaths::from_env`] reads process state; tests build an
//! isolated value with [`DiscoveryPaths::rooted`].

use std::path::{Path, PathBuf};

/// Descriptor file name, used for the default path and the walk-up search
pub const CONFIG_FILE: &str = "hop.json";

/// Per-user configuration directory name
const CONFIG_DIR: &str = "hop";

/// Settings file holding the `hop_config` pin
pub const SETTINGS_FILE: &str = "settings.json";

/// Key of the pin inside the settings file
pub const SETTINGS_KEY: &str = "hop_config";

/// Older pointer file, same directory as the settings file
pub const LEGACY_POINTER_FILE: &str = "pointer.json";

/// Key of the path inside the legacy pointer file
pub const LEGACY_POINTER_KEY: &str = "hop_config_path";

/// Environment variable naming a descriptor to use
pub const ENV_OVERRIDE: &str = "HOP_CONFIG";

/// Maximum number of directories the walk-up search inspects
pub const WALK_UP_LIMIT: usize = 64;

/// System-wide locations checked last
const LEGACY_LOCATIONS: &[&str] = &["/etc/hop/hop.json", "/usr/local/etc/hop/hop.json"];

/// Where the locator looks, in priority order
#[derive(Debug, Clone, Default)]
pub struct DiscoveryPaths {
    /// Settings pointer file (`hop_config` key)
    pub settings_file: Option<PathBuf>,

    /// Value of the override environment variable, if set
    pub env_override: Option<PathBuf>,

    /// Default descriptor location
    pub default_path: Option<PathBuf>,

    /// Legacy pointer file (`hop_config_path` key)
    pub legacy_pointer: Option<PathBuf>,

    /// Fixed fallback locations, checked in order
    pub legacy_locations: Vec<PathBuf>,

    /// Home directory, for `~` in pointer values
    pub home: Option<PathBuf>,
}

impl DiscoveryPaths {
    /// Locations for the current user and process environment
    pub fn from_env() -> Self {
        let home = dirs::home_dir();
        let config_dir = user_config_dir(home.as_deref());
        let env_override = std::env::var_os(ENV_OVERRIDE)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let mut paths = config_dir.map_or_else(Self::default, |dir| Self::rooted(&dir));
        paths.env_override = env_override;
        paths.legacy_locations = LEGACY_LOCATIONS.iter().map(PathBuf::from).collect();
        paths.home = home;
        paths
    }

    /// Settings, default and legacy pointer files under `config_dir`, nothing else
    pub fn rooted(config_dir: &Path) -> Self {
        Self {
            settings_file: Some(config_dir.join(SETTINGS_FILE)),
            env_override: None,
            default_path: Some(config_dir.join(CONFIG_FILE)),
            legacy_pointer: Some(config_dir.join(LEGACY_POINTER_FILE)),
            legacy_locations: Vec::new(),
            home: None,
        }
    }

    #[must_use]
    pub fn with_env_override(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_override = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_legacy_locations(mut self, locations: Vec<PathBuf>) -> Self {
        self.legacy_locations = locations;
        self
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

/// `$XDG_CONFIG_HOME/hop`, else `~/.config/hop`, else the platform config dir
fn user_config_dir(home: Option<&Path>) -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        let xdg = PathBuf::from(xdg);
        if xdg.is_absolute() {
            return Some(xdg.join(CONFIG_DIR));
        }
    }
    home.map(|h| h.join(".config").join(CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|d| d.join(CONFIG_DIR)))
}
