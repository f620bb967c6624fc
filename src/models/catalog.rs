use serde::{Deserialize, Serialize};

/// Obra registrada en el catálogo de metadatos
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogWork {
    pub doi: String,
    pub title: String,
}

/// Respuesta del catálogo (forma Crossref: `{ message: { DOI, title: [...] } }`)
#[derive(Debug, Deserialize)]
pub struct CatalogEnvelope {
    pub message: Option<CatalogMessage>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogMessage {
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(default)]
    pub title: Vec<String>,
}

impl CatalogEnvelope {
    /// Sin identificador o sin título => la obra no se reconoce
    pub fn into_work(self) -> Option<CatalogWork> {
        let message = self.message?;
        let doi = message.doi.filter(|d| !d.trim().is_empty())?;
        let title = message
            .title
            .into_iter()
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())?;
        Some(CatalogWork { doi, title })
    }
}
