use serde::{Deserialize, Serialize};

/// Sesión de wallet (solo en memoria, nunca se persiste)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletSession {
    pub address: Option<String>,
    pub connected: bool,
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Saldo nativo en wei de la cuenta en la red actual
    #[serde(default)]
    pub balance_wei: Option<u128>,
}

impl WalletSession {
    pub fn connected(address: String) -> Self {
        Self {
            address: Some(address),
            connected: true,
            chain_id: None,
            balance_wei: None,
        }
    }

    /// Dirección solo si la sesión está conectada
    pub fn account(&self) -> Option<&str> {
        if self.connected {
            self.address.as_deref()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Transacción para `eth_sendTransaction`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
}
