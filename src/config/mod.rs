use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_notify_endpoint")]
    pub notify_endpoint: String,
    #[serde(default = "default_notify_model")]
    pub notify_model: String,
    #[serde(default)]
    pub notify_api_key: String,
    #[serde(default = "default_notify_timeout")]
    pub notify_timeout_secs: u64,
}

fn default_notify_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_notify_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_notify_timeout() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir().to_string_lossy().to_string(),
            notify_endpoint: default_notify_endpoint(),
            notify_model: default_notify_model(),
            notify_api_key: String::new(),
            notify_timeout_secs: default_notify_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".attlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attlog.conf")
    }

    /// Return the default data directory holding the JSON store
    pub fn data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and data directories
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data directory: user provided or default
        let data_dir = if let Some(name) = custom_data_dir {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_dir()
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create the data directory if missing
        fs::create_dir_all(&data_dir)?;

        println!("✅ Data dir:    {:?}", data_dir);

        Ok(())
    }
}
