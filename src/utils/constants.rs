// Restricciones del formulario de contribución (en caracteres, tras trim)
pub const MIN_TITLE_LEN: usize = 5;
pub const MIN_DOI_LEN: usize = 5;
pub const MIN_ABSTRACT_LEN: usize = 20;

/// Única función del contrato SBT
pub const MINT_SIGNATURE: &str = "mintSBT(address,string,string,string,uint256)";

/// Prefijos que se aceptan delante de un DOI
pub const DOI_PREFIXES: [&str; 5] = [
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi:",
];

/// Id del nodo raíz en index.html
pub const ROOT_ELEMENT_ID: &str = "app";
