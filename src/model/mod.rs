//! In-memory graph elements: property values, relations, vertices, and
//! query-requested order lists.

mod relation;
mod value;

pub use relation::{Direction, Relation};
pub use value::PropValue;

use crate::schema::SortOrder;
use crate::types::{GraphError, Result, TypeId, VertexId};

/// One explicit ordering request from the query layer.
#[derive(Clone, Copy, Debug)]
pub struct OrderEntry {
    /// Relation type whose value gets compared.
    pub key: TypeId,
    /// Requested sort direction.
    pub order: SortOrder,
}

/// Ordered sequence of explicit ordering requests; empty means no explicit
/// order was requested. Duplicate type entries are rejected.
#[derive(Clone, Debug, Default)]
pub struct OrderList {
    entries: Vec<OrderEntry>,
}

impl OrderList {
    /// Creates an empty order list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an ordering request for `key`.
    pub fn push(&mut self, key: TypeId, order: SortOrder) -> Result<()> {
        if self.entries.iter().any(|entry| entry.key == key) {
            return Err(GraphError::Invalid("duplicate order list entry"));
        }
        self.entries.push(OrderEntry { key, order });
        Ok(())
    }

    /// Whether no explicit order was requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in request order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderEntry> {
        self.entries.iter()
    }
}

/// A graph vertex owning its bag of incident relations.
///
/// The bag is unordered; callers sort a snapshot of it with
/// [`crate::order::RelationComparator`] when a deterministic order is needed.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: VertexId,
    relations: Vec<Relation>,
}

impl Vertex {
    /// Creates a vertex with an empty relation bag.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            relations: Vec::new(),
        }
    }

    /// The vertex identifier.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Adds an incident relation, rejecting relations that do not touch this
    /// vertex.
    pub fn add_relation(&mut self, relation: Relation) -> Result<()> {
        if relation.incident_position(self.id).is_none() {
            return Err(GraphError::NotIncident {
                relation: relation.id(),
                vertex: self.id,
            });
        }
        self.relations.push(relation);
        Ok(())
    }

    /// The incident relations, in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Mutable access for in-place sorting.
    pub fn relations_mut(&mut self) -> &mut [Relation] {
        &mut self.relations
    }
}
