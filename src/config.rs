use serde::{Deserialize, Serialize};

const DEFAULT_CONTRACT_ADDRESS: &str = "0xc3c76fD097FBEa31B213660543f8E6166538Bb42";
const DEFAULT_CATALOG_BASE_URL: &str = "https://api.crossref.org";
const DEFAULT_EXPLORER_BASE_URL: &str = "https://etherscan.io";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub contract_address: String,
    pub catalog_base_url: String,
    pub explorer_base_url: String,
    pub enable_logging: bool,
    pub notice_dismiss_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            explorer_base_url: DEFAULT_EXPLORER_BASE_URL.to_string(),
            enable_logging: true,
            notice_dismiss_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            contract_address: option_env!("CONTRACT_ADDRESS")
                .unwrap_or(DEFAULT_CONTRACT_ADDRESS).to_string(),
            catalog_base_url: option_env!("CATALOG_BASE_URL")
                .unwrap_or(DEFAULT_CATALOG_BASE_URL).trim_end_matches('/').to_string(),
            explorer_base_url: option_env!("EXPLORER_BASE_URL")
                .unwrap_or(DEFAULT_EXPLORER_BASE_URL).trim_end_matches('/').to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            notice_dismiss_ms: option_env!("NOTICE_DISMISS_MS")
                .unwrap_or("3000").parse().unwrap_or(3000),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// URL del explorador para una dirección
    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_base_url, address)
    }

    /// URL del explorador para una transacción
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_base_url, tx_hash)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
