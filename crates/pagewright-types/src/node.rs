//! Placed instances: the nodes of the component tree.

use serde::{Deserialize, Serialize};

use crate::block::{BlockKind, Payload};
use crate::ids::NodeId;

/// A concrete node created when a block kind is dropped somewhere.
///
/// `children` is always present, empty for leaves and for sections nothing
/// has been dropped into yet. A forest never hands out `&mut PlacedInstance`,
/// so nodes already placed only grow through drops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedInstance {
    id: NodeId,
    kind: BlockKind,
    #[serde(default)]
    payload: Payload,
    #[serde(default)]
    children: Vec<PlacedInstance>,
}

impl PlacedInstance {
    /// Create an instance with a fresh id and the kind's default payload.
    pub fn new(kind: BlockKind) -> Self {
        Self::with_payload(kind, kind.default_payload())
    }

    /// Create an instance with a fresh id and an explicit payload.
    pub fn with_payload(kind: BlockKind, payload: Payload) -> Self {
        Self {
            id: NodeId::new(),
            kind,
            payload,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn children(&self) -> &[PlacedInstance] {
        &self.children
    }

    /// Check if drops may land inside this node.
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Number of nodes below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Mutable access to the children of an owned instance.
    ///
    /// Inside a forest this is reached only by the placement resolver's
    /// append; callers holding their own instance may build subtrees with it.
    pub fn children_mut(&mut self) -> &mut Vec<PlacedInstance> {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance_has_empty_children() {
        let node = PlacedInstance::new(BlockKind::Header);
        assert!(node.children().is_empty());
        assert_eq!(node.kind(), BlockKind::Header);
        assert_eq!(node.payload(), &Payload::Text("Header".into()));
        assert_eq!(node.descendant_count(), 0);
    }

    #[test]
    fn test_fresh_ids_per_instance() {
        let a = PlacedInstance::new(BlockKind::Header);
        let b = PlacedInstance::new(BlockKind::Header);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.kind(), b.kind());
    }

    #[test]
    fn test_children_stay_in_push_order() {
        let mut section = PlacedInstance::new(BlockKind::Section);
        let header = PlacedInstance::new(BlockKind::Header);
        let banner = PlacedInstance::new(BlockKind::Banner);
        let (h, b) = (header.id(), banner.id());

        section.children_mut().push(header);
        section.children_mut().push(banner);

        let ids: Vec<NodeId> = section.children().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![h, b]);
        assert!(section.is_container());
    }

    #[test]
    fn test_descendant_count_is_deep() {
        let mut inner = PlacedInstance::new(BlockKind::Section);
        inner.children_mut().push(PlacedInstance::new(BlockKind::Banner));
        let mut outer = PlacedInstance::new(BlockKind::Section);
        outer.children_mut().push(PlacedInstance::new(BlockKind::Header));
        outer.children_mut().push(inner);

        assert_eq!(outer.descendant_count(), 3);
        assert_eq!(outer.children().len(), 2);
    }

    #[test]
    fn test_deserialize_defaults_children() {
        let id = NodeId::new();
        let json = format!(r#"{{"id":"{id}","kind":"banner"}}"#);
        let node: PlacedInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(node.id(), id);
        assert!(node.children().is_empty());
        assert_eq!(node.payload(), &Payload::Empty);
    }
}
