// ============================================================================
// WALLET PROVIDER - Acceso al provider inyectado (window.ethereum)
// ============================================================================
// Solo wrappers JSON-RPC sobre `ethereum.request` - Sin estado de sesión
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::TransactionRequest;
use crate::utils::format::parse_hex_quantity;

/// Capacidades de cuenta que el flujo necesita de una wallet
#[async_trait(?Send)]
pub trait AccountProvider {
    /// `eth_requestAccounts` (abre el prompt de la wallet)
    async fn request_accounts(&self) -> Result<Vec<String>, String>;

    /// `eth_accounts` (sin prompt)
    async fn current_accounts(&self) -> Result<Vec<String>, String>;

    async fn chain_id(&self) -> Result<u64, String>;

    /// `eth_getBalance` en wei (bloque `latest`)
    async fn balance(&self, address: &str) -> Result<u128, String>;

    /// `eth_sendTransaction`, devuelve el hash
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, String>;

    /// Notificación `accountsChanged`
    fn on_accounts_changed(&self, callback: Box<dyn Fn(Vec<String>)>) -> Result<(), String>;

    /// Notificación `chainChanged`
    fn on_chain_changed(&self, callback: Box<dyn Fn(u64)>) -> Result<(), String>;
}

/// Provider disponible o no (sin extensión de wallet)
#[derive(Clone)]
pub enum WalletCapability {
    Available(Rc<dyn AccountProvider>),
    Unavailable,
}

impl WalletCapability {
    pub fn provider(&self) -> Option<Rc<dyn AccountProvider>> {
        match self {
            WalletCapability::Available(provider) => Some(provider.clone()),
            WalletCapability::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, WalletCapability::Available(_))
    }
}

/// Provider EIP-1193 inyectado por la extensión
#[derive(Clone)]
pub struct InjectedProvider {
    ethereum: JsValue,
}

impl InjectedProvider {
    /// Buscar `window.ethereum`
    pub fn detect() -> WalletCapability {
        let Some(window) = web_sys::window() else {
            return WalletCapability::Unavailable;
        };
        match Reflect::get(&window, &JsValue::from_str("ethereum")) {
            Ok(ethereum) if !ethereum.is_undefined() && !ethereum.is_null() => {
                log::info!("🦊 [WALLET] Provider inyectado detectado");
                WalletCapability::Available(Rc::new(InjectedProvider { ethereum }))
            }
            _ => {
                log::warn!("⚠️ [WALLET] window.ethereum no existe");
                WalletCapability::Unavailable
            }
        }
    }

    /// `ethereum.request({ method, params })`
    async fn request(&self, method: &str, params: Option<JsValue>) -> Result<JsValue, String> {
        let request_fn = Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .map_err(|e| js_error_message(&e))?
            .dyn_into::<Function>()
            .map_err(|_| "ethereum.request is not a function".to_string())?;

        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(|e| js_error_message(&e))?;
        if let Some(params) = params {
            Reflect::set(&args, &JsValue::from_str("params"), &params)
                .map_err(|e| js_error_message(&e))?;
        }

        let promise = request_fn
            .call1(&self.ethereum, &args)
            .map_err(|e| js_error_message(&e))?
            .dyn_into::<Promise>()
            .map_err(|_| format!("{} did not return a promise", method))?;

        JsFuture::from(promise).await.map_err(|e| js_error_message(&e))
    }

    /// `ethereum.on(event, handler)`
    fn listen<F>(&self, event: &str, handler: F) -> Result<(), String>
    where
        F: Fn(JsValue) + 'static,
    {
        let on_fn = Reflect::get(&self.ethereum, &JsValue::from_str("on"))
            .map_err(|e| js_error_message(&e))?
            .dyn_into::<Function>()
            .map_err(|_| "ethereum.on is not a function".to_string())?;

        let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(JsValue)>);

        on_fn
            .call2(&self.ethereum, &JsValue::from_str(event), closure.as_ref())
            .map_err(|e| js_error_message(&e))?;
        // El provider vive lo mismo que la página
        closure.forget();
        Ok(())
    }
}

#[async_trait(?Send)]
impl AccountProvider for InjectedProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, String> {
        let result = self.request("eth_requestAccounts", None).await?;
        Ok(accounts_from_js(&result))
    }

    async fn current_accounts(&self) -> Result<Vec<String>, String> {
        let result = self.request("eth_accounts", None).await?;
        Ok(accounts_from_js(&result))
    }

    async fn chain_id(&self) -> Result<u64, String> {
        let result = self.request("eth_chainId", None).await?;
        let hex = result
            .as_string()
            .ok_or_else(|| "eth_chainId returned a non-string".to_string())?;
        chain_id_from_hex(&hex)
    }

    async fn balance(&self, address: &str) -> Result<u128, String> {
        let params = Array::of2(&JsValue::from_str(address), &JsValue::from_str("latest"));
        let result = self.request("eth_getBalance", Some(params.into())).await?;
        let hex = result
            .as_string()
            .ok_or_else(|| "eth_getBalance returned a non-string".to_string())?;
        parse_hex_quantity(&hex).ok_or_else(|| format!("Invalid balance: {}", hex))
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, String> {
        let json = serde_json::to_string(&[tx]).map_err(|e| format!("Serialization error: {}", e))?;
        let params = js_sys::JSON::parse(&json).map_err(|e| js_error_message(&e))?;
        let result = self.request("eth_sendTransaction", Some(params)).await?;
        result
            .as_string()
            .ok_or_else(|| "eth_sendTransaction returned no transaction hash".to_string())
    }

    /// Solo debe llamarse UNA VEZ al iniciar la app (listener global)
    fn on_accounts_changed(&self, callback: Box<dyn Fn(Vec<String>)>) -> Result<(), String> {
        self.listen("accountsChanged", move |accounts| {
            callback(accounts_from_js(&accounts));
        })
    }

    /// Igual que `on_accounts_changed`: una sola vez al iniciar
    fn on_chain_changed(&self, callback: Box<dyn Fn(u64)>) -> Result<(), String> {
        self.listen("chainChanged", move |chain| {
            match chain.as_string().map(|hex| chain_id_from_hex(&hex)) {
                Some(Ok(chain_id)) => callback(chain_id),
                _ => log::warn!("⚠️ [WALLET] chainChanged con valor inválido: {:?}", chain),
            }
        })
    }
}

fn chain_id_from_hex(hex: &str) -> Result<u64, String> {
    parse_hex_quantity(hex)
        .and_then(|id| u64::try_from(id).ok())
        .ok_or_else(|| format!("Invalid chain id: {}", hex))
}

fn accounts_from_js(value: &JsValue) -> Vec<String> {
    if !Array::is_array(value) {
        return Vec::new();
    }
    Array::from(value).iter().filter_map(|v| v.as_string()).collect()
}

/// Errores EIP-1193 son objetos `{ code, message }`
fn js_error_message(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_ids_from_hex() {
        assert_eq!(chain_id_from_hex("0xaa36a7"), Ok(11155111));
        assert_eq!(chain_id_from_hex("0x89"), Ok(137));
        assert!(chain_id_from_hex("sepolia").is_err());
        assert!(chain_id_from_hex("0x1ffffffffffffffff").is_err());
    }
}
