// ============================================================================
// CATALOG CLIENT - SOLO COMUNICACIÓN HTTP con el catálogo de DOIs (Stateless)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::CONFIG;
use crate::errors::AppError;
use crate::models::{CatalogEnvelope, CatalogWork};

/// Segmento de ruta: se escapa todo salvo no-reservados y `/` (prefijo/sufijo del DOI)
const DOI_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Búsqueda de metadatos de una obra por DOI
#[async_trait(?Send)]
pub trait MetadataCatalog {
    /// Cualquier fallo (red, HTTP, JSON, campos) => `InvalidIdentifier`
    async fn lookup(&self, doi: &str) -> Result<CatalogWork, AppError>;
}

/// Cliente del catálogo (API estilo Crossref)
#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.catalog_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn work_url(&self, doi: &str) -> String {
        format!("{}/works/{}", self.base_url, utf8_percent_encode(doi, DOI_PATH))
    }

    async fn fetch_work(&self, doi: &str) -> Result<CatalogWork, String> {
        let url = self.work_url(doi);
        log::info!("🔍 [CATALOG] Consultando {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let envelope = response
            .json::<CatalogEnvelope>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        envelope
            .into_work()
            .ok_or_else(|| "Response without identifier or title".to_string())
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl MetadataCatalog for CatalogClient {
    async fn lookup(&self, doi: &str) -> Result<CatalogWork, AppError> {
        match self.fetch_work(doi).await {
            Ok(work) => {
                log::info!("✅ [CATALOG] {} => '{}'", work.doi, work.title);
                Ok(work)
            }
            Err(e) => {
                log::warn!("⚠️ [CATALOG] DOI {} no reconocido: {}", doi, e);
                Err(AppError::InvalidIdentifier(doi.to_string()))
            }
        }
    }
}
