// ============================================================================
// DOI REGISTRY - DOIs ya enviados al contrato en esta sesión
// ============================================================================
// Solo memoria: se pierde al recargar y no es autoritativo (no hay chequeo
// on-chain de duplicados). Evita gastar una transacción en duplicados obvios.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::models::normalize_doi;

/// Conjunto compartido; los clones ven los mismos DOIs
#[derive(Clone, Default, Debug)]
pub struct SubmittedDoiSet {
    dois: Rc<RefCell<HashSet<String>>>,
}

impl SubmittedDoiSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, doi: &str) -> bool {
        self.dois.borrow().contains(&normalize_doi(doi))
    }

    /// Registrar DOI; false si ya estaba
    pub fn record(&self, doi: &str) -> bool {
        self.dois.borrow_mut().insert(normalize_doi(doi))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.dois.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.dois.borrow().is_empty()
    }

    #[cfg(test)]
    pub fn clear(&self) {
        self.dois.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_normalized() {
        let set = SubmittedDoiSet::new();
        assert!(set.record("10.1234/QCADD.2023.001"));
        assert!(set.contains("https://doi.org/10.1234/qcadd.2023.001"));
        assert!(!set.record("doi:10.1234/qcadd.2023.001"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clones_share_and_clear() {
        let set = SubmittedDoiSet::new();
        let other = set.clone();
        other.record("10.1/a");
        assert!(set.contains("10.1/a"));
        set.clear();
        assert!(other.is_empty());
    }
}
