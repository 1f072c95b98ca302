use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub upload: UploadConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со сборкой фронтенда (trunk dist)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UploadConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub preview_chars: usize,
    /// Максимальный размер тела запроса загрузки, байт
    pub max_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    pub top_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: "dist".into(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: vec![
                "http://localhost:5173".into(),
                "http://localhost:3000".into(),
                "http://127.0.0.1:8080".into(),
            ],
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
            preview_chars: 200,
            max_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[cors]
origins = ["http://localhost:5173", "http://localhost:3000", "http://127.0.0.1:8080"]

[upload]
chunk_size = 500
chunk_overlap = 50
preview_chars = 200
max_bytes = 20971520

[chat]
top_k = 3
"#;

impl Config {
    /// Конфигурация, встроенная в бинарник
    pub fn embedded() -> anyhow::Result<Self> {
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", addr, e))
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Config::embedded()
}

/// Зафиксировать конфигурацию процесса (вызывается один раз из main)
pub fn install(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Текущая конфигурация; до вызова [`install`] - значения по умолчанию
pub fn current() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
