//! The forest: named work areas holding the component trees.
//!
//! Read access is open to renderers and the serializer. Write access is
//! crate-private: only the placement resolver appends nodes.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use pagewright_types::{NodeId, PlacedInstance};

use crate::placement::{InsertionPoint, NodePath};
use crate::{Result, TreeError};

/// Container name → ordered node sequence, in container insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    containers: IndexMap<String, Vec<PlacedInstance>>,
}

// IndexMap equality ignores entry order; container order is observable here.
impl PartialEq for Forest {
    fn eq(&self, other: &Self) -> bool {
        self.containers.iter().eq(other.containers.iter())
    }
}

impl Eq for Forest {}

impl Forest {
    /// Create a forest with no containers. Nothing can be dropped until one is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forest pre-seeded with empty containers.
    pub fn with_containers<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut forest = Self::new();
        for name in names {
            forest.add_container(name);
        }
        forest
    }

    /// Seed an empty container. Returns `false` if it already existed.
    pub fn add_container(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.containers.contains_key(&name) {
            return false;
        }
        self.containers.insert(name, Vec::new());
        true
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Container names in insertion order.
    pub fn container_names(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(|k| k.as_str())
    }

    /// Nodes directly inside a container.
    pub fn container(&self, name: &str) -> Option<&[PlacedInstance]> {
        self.containers.get(name).map(|v| v.as_slice())
    }

    /// `(name, nodes)` pairs in insertion order.
    pub fn containers(&self) -> impl Iterator<Item = (&str, &[PlacedInstance])> {
        self.containers
            .iter()
            .map(|(name, nodes)| (name.as_str(), nodes.as_slice()))
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Total number of placed nodes, at any depth.
    pub fn node_count(&self) -> usize {
        self.containers
            .values()
            .flatten()
            .map(|n| 1 + n.descendant_count())
            .sum()
    }

    /// Check if no node has been placed (containers may still exist).
    pub fn is_empty(&self) -> bool {
        self.containers.values().all(|nodes| nodes.is_empty())
    }

    /// Iterate every node in pre-order: containers in order, then children in order.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }

    /// Find a node anywhere in the forest.
    pub fn find(&self, id: NodeId) -> Option<&PlacedInstance> {
        self.walk().map(|v| v.node).find(|n| n.id() == id)
    }

    /// Position of the first node with this id, in pre-order.
    pub fn locate(&self, id: NodeId) -> Option<NodePath> {
        for (container, nodes) in self.containers.values().enumerate() {
            let mut indices = Vec::new();
            if search(nodes, id, &mut indices) {
                return Some(NodePath { container, indices });
            }
        }
        None
    }

    /// The node a path points at.
    pub fn node_at(&self, path: &NodePath) -> Option<&PlacedInstance> {
        let (_, nodes) = self.containers.get_index(path.container)?;
        let (first, rest) = path.indices.split_first()?;
        let mut node = nodes.get(*first)?;
        for &i in rest {
            node = node.children().get(i)?;
        }
        Some(node)
    }

    /// Index of a container by name.
    pub fn container_index(&self, name: &str) -> Option<usize> {
        self.containers.get_index_of(name)
    }

    /// Name of a container by index.
    pub fn container_name(&self, index: usize) -> Option<&str> {
        self.containers.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Sibling sequence a drop at `point` would append to.
    pub fn slot(&self, point: &InsertionPoint) -> Option<&[PlacedInstance]> {
        match point {
            InsertionPoint::Container(index) => {
                self.containers.get_index(*index).map(|(_, v)| v.as_slice())
            }
            InsertionPoint::Node(path) => self.node_at(path).map(|n| n.children()),
        }
    }

    /// Check structural invariants, e.g. after loading a snapshot: ids are
    /// unique and only sections hold children.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for visit in self.walk() {
            let node = visit.node;
            if !seen.insert(node.id()) {
                return Err(TreeError::DuplicateId(node.id()));
            }
            if !node.is_container() && !node.children().is_empty() {
                return Err(TreeError::LeafWithChildren(node.id()));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Write access (placement resolver only)
    // =========================================================================

    pub(crate) fn slot_mut(&mut self, point: &InsertionPoint) -> Option<&mut Vec<PlacedInstance>> {
        match point {
            InsertionPoint::Container(index) => {
                self.containers.get_index_mut(*index).map(|(_, v)| v)
            }
            InsertionPoint::Node(path) => {
                let (_, nodes) = self.containers.get_index_mut(path.container)?;
                let (first, rest) = path.indices.split_first()?;
                let mut node = nodes.get_mut(*first)?;
                for &i in rest {
                    node = node.children_mut().get_mut(i)?;
                }
                Some(node.children_mut())
            }
        }
    }
}

/// Depth-first pre-order search, recording child indices along the way.
fn search(nodes: &[PlacedInstance], id: NodeId, path: &mut Vec<usize>) -> bool {
    for (i, node) in nodes.iter().enumerate() {
        path.push(i);
        if node.id() == id || search(node.children(), id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// One step of a forest walk.
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    /// Container the node lives under.
    pub container: &'a str,
    /// 0 for nodes directly inside the container.
    pub depth: usize,
    pub node: &'a PlacedInstance,
}

/// Pre-order iterator over every node of a forest.
pub struct Walk<'a> {
    containers: indexmap::map::Iter<'a, String, Vec<PlacedInstance>>,
    current: &'a str,
    stack: Vec<(usize, &'a PlacedInstance)>,
}

impl<'a> Walk<'a> {
    fn new(forest: &'a Forest) -> Self {
        Self {
            containers: forest.containers.iter(),
            current: "",
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((depth, node)) = self.stack.pop() {
                // Push children in reverse to visit them in order
                for child in node.children().iter().rev() {
                    self.stack.push((depth + 1, child));
                }
                return Some(Visit {
                    container: self.current,
                    depth,
                    node,
                });
            }

            let (name, nodes) = self.containers.next()?;
            self.current = name.as_str();
            self.stack.extend(nodes.iter().rev().map(|n| (0, n)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{place_in, BlockCatalog, BlockKind};

    fn two_areas() -> Forest {
        Forest::with_containers(["work-area-1", "work-area-2"])
    }

    #[test]
    fn test_with_containers_keeps_order() {
        let forest = Forest::with_containers(["b", "a", "c"]);
        let names: Vec<&str> = forest.container_names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(forest.is_empty());
        assert_eq!(forest.node_count(), 0);
    }

    #[test]
    fn test_add_container_is_idempotent() {
        let mut forest = two_areas();
        assert!(!forest.add_container("work-area-1"));
        assert!(forest.add_container("work-area-3"));
        assert_eq!(forest.container_count(), 3);
        assert_eq!(forest.container("work-area-3"), Some(&[][..]));
    }

    #[test]
    fn test_walk_is_preorder_across_containers() {
        let catalog = BlockCatalog::standard();
        let mut forest = two_areas();
        let s = place_in(&mut forest, &catalog, BlockKind::Section, "work-area-1")
            .unwrap()
            .inserted()
            .unwrap();
        place_in(&mut forest, &catalog, BlockKind::Header, &s.to_string()).unwrap();
        place_in(&mut forest, &catalog, BlockKind::Footer, "work-area-1").unwrap();
        place_in(&mut forest, &catalog, BlockKind::Banner, "work-area-2").unwrap();

        let visits: Vec<(&str, usize, BlockKind)> = forest
            .walk()
            .map(|v| (v.container, v.depth, v.node.kind()))
            .collect();
        assert_eq!(
            visits,
            vec![
                ("work-area-1", 0, BlockKind::Section),
                ("work-area-1", 1, BlockKind::Header),
                ("work-area-1", 0, BlockKind::Footer),
                ("work-area-2", 0, BlockKind::Banner),
            ]
        );
        assert_eq!(forest.node_count(), 4);
    }

    #[test]
    fn test_locate_and_node_at() {
        let catalog = BlockCatalog::standard();
        let mut forest = two_areas();
        let outer = place_in(&mut forest, &catalog, BlockKind::Section, "work-area-2")
            .unwrap()
            .inserted()
            .unwrap();
        let inner = place_in(&mut forest, &catalog, BlockKind::Section, &outer.to_string())
            .unwrap()
            .inserted()
            .unwrap();

        let path = forest.locate(inner).unwrap();
        assert_eq!(path.container, 1);
        assert_eq!(path.indices, vec![0, 0]);
        assert_eq!(forest.node_at(&path).unwrap().id(), inner);
        assert_eq!(forest.find(outer).unwrap().children().len(), 1);
        assert!(forest.locate(NodeId::new()).is_none());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let forest = two_areas();
        let node = PlacedInstance::new(BlockKind::Header);
        let json = serde_json::json!({
            "work-area-1": [node.clone()],
            "work-area-2": [node.clone()],
        });
        let loaded: Forest = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.validate(), Err(TreeError::DuplicateId(node.id())));
        assert_eq!(forest.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_leaf_with_children() {
        let banner = PlacedInstance::new(BlockKind::Banner);
        let header = PlacedInstance::new(BlockKind::Header);
        let json = serde_json::json!({
            "root": [{
                "id": header.id(),
                "kind": "header",
                "children": [banner],
            }],
        });
        let loaded: Forest = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.validate(), Err(TreeError::LeafWithChildren(header.id())));
    }

    #[test]
    fn test_equality_respects_container_order() {
        let xy = Forest::with_containers(["x", "y"]);
        let yx = Forest::with_containers(["y", "x"]);
        assert_ne!(xy, yx);
        assert_eq!(xy, Forest::with_containers(["x", "y"]));
    }

    #[test]
    fn test_serde_is_plain_mapping() {
        let forest = two_areas();
        let json = serde_json::to_string(&forest).unwrap();
        assert_eq!(json, r#"{"work-area-1":[],"work-area-2":[]}"#);
        let back: Forest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, forest);
    }
}
