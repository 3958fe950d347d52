//! Identifier newtypes and the crate error type.

use std::fmt;

use thiserror::Error;

/// Identifier of a vertex.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct VertexId(pub u64);

/// Globally unique identifier of a relation (property or edge).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RelationId(pub u64);

/// Canonical identifier of a schema relation type (property key or edge
/// label). The `Ord` impl is the canonical type order used by the comparator.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TypeId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors surfaced by the ordering subsystem.
///
/// `UnknownType` and `NotIncident` signal schema or caller inconsistencies;
/// they are never retried here. `Retrieval` carries a value/schema fetch
/// failure from the layer below, unwrapped.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A type id did not resolve against the active schema.
    #[error("unknown relation type {0}")]
    UnknownType(TypeId),
    /// A relation handed to the comparator does not touch its reference
    /// vertex, so its direction is undefined.
    #[error("relation {relation} not incident on vertex {vertex}")]
    NotIncident {
        /// The offending relation.
        relation: RelationId,
        /// The comparator's reference vertex.
        vertex: VertexId,
    },
    /// A caller-side precondition was violated.
    #[error("invalid argument: {0}")]
    Invalid(&'static str),
    /// A value or type fetch from the backing layer failed.
    #[error("retrieval failed: {0}")]
    Retrieval(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;
