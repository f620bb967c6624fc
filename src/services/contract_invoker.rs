// ============================================================================
// CONTRACT INVOKER - Llamada a mintSBT en el contrato fijo
// ============================================================================
// No idempotente: dos llamadas con los mismos argumentos mintean dos veces
// ============================================================================

use crate::config::CONFIG;
use crate::errors::AppError;
use crate::models::{TransactionRequest, ValidSubmission};
use crate::services::abi::{encode_call, parse_address, Token};
use crate::services::WalletCapability;
use crate::utils::constants::MINT_SIGNATURE;

/// Binding del contrato SBT (dirección + ABI de una función)
#[derive(Clone)]
pub struct ContractInvoker {
    contract_address: String,
    capability: WalletCapability,
}

impl ContractInvoker {
    pub fn new(capability: WalletCapability) -> Self {
        Self::with_address(&CONFIG.contract_address, capability)
    }

    pub fn with_address(contract_address: &str, capability: WalletCapability) -> Self {
        Self {
            contract_address: contract_address.to_string(),
            capability,
        }
    }

    /// Calldata de `mintSBT(to, title, doi, repository, 0)`
    pub fn mint_calldata(recipient: &str, submission: &ValidSubmission) -> Result<String, String> {
        let to = parse_address(recipient)?;
        Ok(encode_call(
            MINT_SIGNATURE,
            &[
                Token::Address(to),
                Token::String(submission.title.clone()),
                Token::String(submission.doi.clone()),
                Token::String(submission.repository.clone().unwrap_or_default()),
                Token::Uint(0),
            ],
        ))
    }

    /// Enviar la transacción desde la cuenta conectada; devuelve el hash
    pub async fn mint(&self, recipient: &str, submission: &ValidSubmission) -> Result<String, AppError> {
        let provider = self.capability.provider().ok_or(AppError::ProviderUnavailable)?;

        let data = Self::mint_calldata(recipient, submission).map_err(AppError::MintFailed)?;
        let tx = TransactionRequest {
            from: recipient.to_string(),
            to: self.contract_address.clone(),
            data,
        };

        log::info!("⛓️ [MINT] mintSBT para {} (DOI {})", recipient, submission.doi);

        match provider.send_transaction(&tx).await {
            Ok(hash) => {
                log::info!("✅ [MINT] Transacción enviada: {}", hash);
                Ok(hash)
            }
            Err(e) => {
                log::error!("❌ [MINT] Minting SBT failed: {}", e);
                Err(AppError::MintFailed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::abi::selector;

    fn submission() -> ValidSubmission {
        ValidSubmission {
            title: "Quantum Drug Discovery".into(),
            doi: "10.1234/qcadd.2023.001".into(),
            repository: None,
            abstract_text: "Quantum algorithms for molecular docking.".into(),
        }
    }

    #[test]
    fn calldata_starts_with_mint_selector() {
        let data = ContractInvoker::mint_calldata(
            "0x1111111111111111111111111111111111111111",
            &submission(),
        )
        .unwrap();
        let expected = format!("0x{}", hex::encode(selector(MINT_SIGNATURE)));
        assert!(data.starts_with(&expected));
        // selector + 5 palabras de cabecera + 3 strings (len + 1 palabra, len + 1, len)
        assert_eq!((data.len() - 2) / 2, 4 + 5 * 32 + 2 * 64 + 32);
    }

    #[test]
    fn bad_recipient_is_rejected() {
        assert!(ContractInvoker::mint_calldata("not-an-address", &submission()).is_err());
    }

    #[tokio::test]
    async fn missing_provider_fails_fast() {
        let invoker = ContractInvoker::with_address(
            "0xc3c76fD097FBEa31B213660543f8E6166538Bb42",
            WalletCapability::Unavailable,
        );
        let result = invoker
            .mint("0x1111111111111111111111111111111111111111", &submission())
            .await;
        assert_eq!(result, Err(AppError::ProviderUnavailable));
    }
}
