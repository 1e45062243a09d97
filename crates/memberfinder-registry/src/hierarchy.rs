//! Type hierarchy - the subtype graph behind supertype queries.
//!
//! Uses `petgraph::DiGraph` with:
//! - Nodes: `TypeHash` of every registered or referenced type
//! - Edges: subtype -> direct supertype, weighted with declaration order

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use memberfinder_core::TypeHash;

/// Edge from a type to one of its direct supertypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupertypeEdge {
    /// Position in the declaration: 0 is the base class (if any), then
    /// interfaces in declaration order.
    pub position: u16,
}

/// Directed graph of direct supertype relations.
///
/// Supertypes may be referenced before they are registered; the node exists
/// as soon as anything points at it.
#[derive(Debug, Default)]
pub struct TypeHierarchy {
    graph: DiGraph<TypeHash, SupertypeEdge>,
    nodes: FxHashMap<TypeHash, NodeIndex>,
}

impl TypeHierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `hash`.
    pub fn node(&mut self, hash: TypeHash) -> NodeIndex {
        if let Some(&node) = self.nodes.get(&hash) {
            return node;
        }
        let node = self.graph.add_node(hash);
        self.nodes.insert(hash, node);
        node
    }

    /// Record that `sub` directly extends or implements `supers`, in order.
    pub fn add_supertypes(&mut self, sub: TypeHash, supers: &[TypeHash]) {
        let from = self.node(sub);
        for (position, &sup) in supers.iter().enumerate() {
            let to = self.node(sup);
            self.graph.add_edge(
                from,
                to,
                SupertypeEdge {
                    position: position as u16,
                },
            );
        }
    }

    /// Direct supertypes of `hash`, in declaration order.
    pub fn direct_supertypes(&self, hash: TypeHash) -> Vec<TypeHash> {
        let Some(&node) = self.nodes.get(&hash) else {
            return Vec::new();
        };
        self.ordered_targets(node)
            .into_iter()
            .map(|n| self.graph[n])
            .collect()
    }

    /// Direct subtypes of `hash` (no particular order).
    pub fn direct_subtypes(&self, hash: TypeHash) -> Vec<TypeHash> {
        let Some(&node) = self.nodes.get(&hash) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .map(|n| self.graph[n])
            .collect()
    }

    /// Transitive supertypes of `hash`, breadth-first, excluding `hash`.
    ///
    /// At each level the base class comes before interfaces. A type reachable
    /// along several paths is listed once, at its first visit.
    pub fn supertypes(&self, hash: TypeHash) -> Vec<TypeHash> {
        let Some(&start) = self.nodes.get(&hash) else {
            return Vec::new();
        };

        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut queue = VecDeque::from([start]);
        let mut closure = Vec::new();

        while let Some(node) = queue.pop_front() {
            for target in self.ordered_targets(node) {
                if visited.insert(target) {
                    closure.push(self.graph[target]);
                    queue.push_back(target);
                }
            }
        }

        closure
    }

    /// Check if any type transitively extends itself.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Every (subtype, supertype) edge in the graph.
    pub fn edges(&self) -> impl Iterator<Item = (TypeHash, TypeHash)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()]))
    }

    /// Number of types known to the hierarchy.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Check if the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    fn ordered_targets(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_by_key(|e| e.weight().position);
        edges.into_iter().map(|e| e.target()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(name: &str) -> TypeHash {
        TypeHash::from_name(name)
    }

    #[test]
    fn direct_supertypes_keep_declaration_order() {
        let mut tree = TypeHierarchy::new();
        tree.add_supertypes(h("ArrayList"), &[h("AbstractList"), h("List"), h("RandomAccess")]);

        assert_eq!(
            tree.direct_supertypes(h("ArrayList")),
            vec![h("AbstractList"), h("List"), h("RandomAccess")]
        );
    }

    #[test]
    fn closure_is_breadth_first_and_deduplicated() {
        let mut tree = TypeHierarchy::new();
        tree.add_supertypes(h("ArrayList"), &[h("AbstractList"), h("List")]);
        tree.add_supertypes(h("AbstractList"), &[h("Object"), h("List")]);
        tree.add_supertypes(h("List"), &[h("Collection")]);

        assert_eq!(
            tree.supertypes(h("ArrayList")),
            vec![h("AbstractList"), h("List"), h("Object"), h("Collection")]
        );
    }

    #[test]
    fn unknown_type_has_no_supertypes() {
        let tree = TypeHierarchy::new();
        assert!(tree.supertypes(h("Ghost")).is_empty());
        assert!(tree.is_empty());
    }

    #[test]
    fn subtypes_are_reverse_edges() {
        let mut tree = TypeHierarchy::new();
        tree.add_supertypes(h("String"), &[h("Object")]);
        tree.add_supertypes(h("Integer"), &[h("Object")]);

        let mut subs = tree.direct_subtypes(h("Object"));
        subs.sort();
        let mut expected = vec![h("String"), h("Integer")];
        expected.sort();
        assert_eq!(subs, expected);
    }

    #[test]
    fn cycle_detection() {
        let mut tree = TypeHierarchy::new();
        tree.add_supertypes(h("A"), &[h("B")]);
        assert!(!tree.has_cycle());
        tree.add_supertypes(h("B"), &[h("A")]);
        assert!(tree.has_cycle());
    }
}
