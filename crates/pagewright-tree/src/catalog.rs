//! Block catalog: the blocks a user can drag, and the factory for them.

use pagewright_types::{BlockKind, Payload, PlacedInstance};

use crate::{Result, TreeError};

/// One draggable block offered to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: BlockKind,
    /// What the palette shows, and what a placed instance starts with.
    pub payload: Payload,
}

impl CatalogEntry {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            payload: kind.default_payload(),
        }
    }
}

/// Ordered registry of available block kinds.
#[derive(Clone, Debug)]
pub struct BlockCatalog {
    entries: Vec<CatalogEntry>,
}

impl BlockCatalog {
    /// Header, footer, banner, section, in that order.
    pub fn standard() -> Self {
        Self::with_kinds(BlockKind::ALL)
    }

    /// A catalog offering only the given kinds, in the given order.
    ///
    /// Repeated kinds keep their first position.
    pub fn with_kinds(kinds: impl IntoIterator<Item = BlockKind>) -> Self {
        let mut entries: Vec<CatalogEntry> = Vec::new();
        for kind in kinds {
            if !entries.iter().any(|e| e.kind == kind) {
                entries.push(CatalogEntry::new(kind));
            }
        }
        Self { entries }
    }

    /// Replace the payload of an offered kind. Unknown kinds are ignored.
    pub fn with_payload(mut self, kind: BlockKind, payload: Payload) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.kind == kind) {
            entry.payload = payload;
        }
        self
    }

    /// Available blocks in palette order.
    pub fn list_available(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// Resolve a gesture source id (a catalog tag) to the kind it offers.
    pub fn lookup(&self, source_id: &str) -> Result<BlockKind> {
        BlockKind::from_str(source_id)
            .filter(|kind| self.contains(*kind))
            .ok_or_else(|| TreeError::UnknownSource(source_id.to_string()))
    }

    /// Produce a new instance of `kind` with a fresh id and no children.
    pub fn instantiate(&self, kind: BlockKind) -> Result<PlacedInstance> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.kind == kind)
            .ok_or(TreeError::NotInCatalog(kind))?;
        Ok(PlacedInstance::with_payload(kind, entry.payload.clone()))
    }
}

impl Default for BlockCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let catalog = BlockCatalog::standard();
        let kinds: Vec<BlockKind> = catalog.list_available().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Header, BlockKind::Footer, BlockKind::Banner, BlockKind::Section]
        );
    }

    #[test]
    fn test_instantiate_fresh_ids() {
        let catalog = BlockCatalog::standard();
        let a = catalog.instantiate(BlockKind::Section).unwrap();
        let b = catalog.instantiate(BlockKind::Section).unwrap();
        assert_ne!(a.id(), b.id());
        assert!(a.children().is_empty());
    }

    #[test]
    fn test_instantiate_outside_catalog_fails() {
        let catalog = BlockCatalog::with_kinds([BlockKind::Header]);
        assert_eq!(
            catalog.instantiate(BlockKind::Footer),
            Err(TreeError::NotInCatalog(BlockKind::Footer))
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = BlockCatalog::with_kinds([BlockKind::Banner, BlockKind::Section]);
        assert_eq!(catalog.lookup("banner"), Ok(BlockKind::Banner));
        assert_eq!(catalog.lookup("SECTION"), Ok(BlockKind::Section));
        assert_eq!(
            catalog.lookup("header"),
            Err(TreeError::UnknownSource("header".into()))
        );
        assert_eq!(
            catalog.lookup("sidebar"),
            Err(TreeError::UnknownSource("sidebar".into()))
        );
    }

    #[test]
    fn test_with_kinds_dedups() {
        let catalog =
            BlockCatalog::with_kinds([BlockKind::Footer, BlockKind::Header, BlockKind::Footer]);
        assert_eq!(catalog.list_available().len(), 2);
        assert_eq!(catalog.list_available()[0].kind, BlockKind::Footer);
    }

    #[test]
    fn test_custom_payload_flows_to_instances() {
        let catalog = BlockCatalog::standard()
            .with_payload(BlockKind::Banner, Payload::Text("Big sale".into()));
        let node = catalog.instantiate(BlockKind::Banner).unwrap();
        assert_eq!(node.payload(), &Payload::Text("Big sale".into()));
    }
}
