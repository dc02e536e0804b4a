use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// PostgreSQL connection URL for catalog / orders / appointments
    pub postgres_url: String,
    #[serde(default)]
    pub orders: OrdersConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Order lifecycle policy knobs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrdersConfig {
    /// Restore line-item stock on the first transition into `cancelled`.
    /// Off by default: the shop restocks returned frames manually.
    pub restock_on_cancel: bool,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            restock_on_cancel: false,
        }
    }
}

/// Back-office authentication
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminConfig {
    /// Argon2 PHC-format hash of the admin password
    pub password_hash: String,
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

fn default_token_ttl_hours() -> i64 {
    24 * 7
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}
