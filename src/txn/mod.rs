//! Read-only transaction context for schema resolution.
//!
//! The source of type metadata is passed explicitly wherever ordering code
//! needs it; there is no ambient transaction state.

use std::sync::Arc;

use crate::schema::{RelationType, SchemaRegistry};
use crate::types::{Result, TypeId};

/// Handle to the schema snapshot a transaction reads from.
///
/// Cheap to clone; all accessors are read-only.
#[derive(Clone)]
pub struct TxContext {
    schema: Arc<SchemaRegistry>,
}

impl TxContext {
    /// Creates a context over the given schema snapshot.
    pub fn new(schema: Arc<SchemaRegistry>) -> Self {
        Self { schema }
    }

    /// Resolves a type id against the active schema.
    ///
    /// An unknown id is a schema invariant violation and surfaces
    /// immediately; it is never retried here.
    pub fn resolve_type(&self, id: TypeId) -> Result<Arc<RelationType>> {
        self.schema.resolve(id)
    }

    /// The underlying registry.
    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }
}
