//! The reachability order between vertices.
//!
//! This is deliberately NOT a total order and [`VertexRef`] does not implement
//! `Ord` or `PartialOrd`. A vertex is "less" than every vertex it can reach
//! and "greater" than every vertex that can reach it. Unrelated vertices
//! compare `Equal` under [`VertexRef::compare`], which breaks antisymmetry:
//! `Equal` does not mean interchangeable. Use [`VertexRef::partial_compare`]
//! to tell "unrelated" apart from "same vertex".

use std::cmp::Ordering;

use kvdag_core::GraphError;

use crate::vertex::{AsVertex, VertexRef};

impl VertexRef<'_> {
    /// `Less` if this vertex reaches `other`, `Greater` if `other` reaches
    /// it, `Equal` for the vertex itself and for unrelated vertices.
    pub fn compare(&self, other: impl AsVertex) -> Result<Ordering, GraphError> {
        Ok(self.partial_compare(other)?.unwrap_or(Ordering::Equal))
    }

    /// Like [`Self::compare`] but returns `None` for unrelated vertices.
    pub fn partial_compare(&self, other: impl AsVertex) -> Result<Option<Ordering>, GraphError> {
        let other = other.as_vertex();
        // Membership is checked by `reachable` before identity, so a foreign
        // handle is always an error.
        if self.reachable(other)? {
            if other == self.id() {
                return Ok(Some(Ordering::Equal));
            }
            return Ok(Some(Ordering::Less));
        }
        if self.reachable_from(other)? {
            return Ok(Some(Ordering::Greater));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use kvdag_core::AttributeMap;

    use super::*;
    use crate::Graph;

    #[test]
    fn order_follows_reachability() {
        let mut graph = Graph::new();
        let parent = graph.new_vertex(AttributeMap::new());
        let child = graph.new_vertex(AttributeMap::new());
        let loner = graph.new_vertex(AttributeMap::new());
        graph.edge(child, parent, AttributeMap::new()).unwrap();

        let child_ref = graph.vertex(child).unwrap();
        let parent_ref = graph.vertex(parent).unwrap();
        assert_eq!(child_ref.compare(parent).unwrap(), Ordering::Less);
        assert_eq!(parent_ref.compare(child).unwrap(), Ordering::Greater);
        assert_eq!(child_ref.compare(child).unwrap(), Ordering::Equal);

        // Unrelated vertices collapse to Equal but are distinguishable.
        assert_eq!(child_ref.compare(loner).unwrap(), Ordering::Equal);
        assert_eq!(child_ref.partial_compare(loner).unwrap(), None);
        assert_eq!(child_ref.partial_compare(child).unwrap(), Some(Ordering::Equal));
    }

    #[test]
    fn compare_rejects_foreign_vertices() {
        let mut first = Graph::new();
        let mut second = Graph::new();
        let a = first.new_vertex(AttributeMap::new());
        let b = second.new_vertex(AttributeMap::new());

        let err = first.vertex(a).unwrap().compare(b).unwrap_err();
        assert!(matches!(err, GraphError::CrossGraph { .. }));
    }
}
