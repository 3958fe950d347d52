//! Relation type definitions and the registry that resolves type ids.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::model::Direction;
use crate::types::{GraphError, Result, TypeId};

/// Sort direction applied to a comparison result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum SortOrder {
    /// Ascending (natural) order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Modulates a natural-order result: unchanged for `Asc`, reversed for
    /// `Desc`.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// How many relations of a type may exist per vertex and direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Multiplicity {
    /// Any number of relations between any pair of endpoints.
    #[default]
    Multi,
    /// At most one relation between a given ordered endpoint pair.
    Simple,
    /// At most one outgoing relation per vertex.
    ManyToOne,
    /// At most one incoming relation per vertex.
    OneToMany,
    /// At most one relation per vertex in either direction.
    OneToOne,
}

impl Multiplicity {
    /// Whether at most one relation of this multiplicity may exist from a
    /// vertex in `dir`. `Both` requires uniqueness in both directions.
    pub fn is_unique(self, dir: Direction) -> bool {
        match self {
            Multiplicity::Multi | Multiplicity::Simple => false,
            Multiplicity::ManyToOne => dir == Direction::Out,
            Multiplicity::OneToMany => dir == Direction::In,
            Multiplicity::OneToOne => true,
        }
    }

    /// Whether at most one relation may exist between a given ordered pair
    /// of endpoints.
    pub fn is_constrained(self) -> bool {
        !matches!(self, Multiplicity::Multi)
    }
}

/// Whether a relation type is a property key or an edge label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeKind {
    /// Binds scalar values to vertices.
    PropertyKey,
    /// Connects vertex pairs.
    EdgeLabel,
}

/// Schema definition of a relation type.
///
/// The sort key is an ordered sequence of other type ids defining the
/// canonical secondary order among relations sharing this type and
/// direction; `sort_order` applies uniformly across the whole key.
#[derive(Clone, Debug)]
pub struct RelationType {
    id: TypeId,
    name: String,
    kind: TypeKind,
    multiplicity: Multiplicity,
    sort_key: SmallVec<[TypeId; 4]>,
    sort_order: SortOrder,
}

impl RelationType {
    /// Defines a property key with `Multi` multiplicity and no sort key.
    pub fn property_key(id: TypeId, name: impl Into<String>) -> Self {
        Self::new(id, name, TypeKind::PropertyKey)
    }

    /// Defines an edge label with `Multi` multiplicity and no sort key.
    pub fn edge_label(id: TypeId, name: impl Into<String>) -> Self {
        Self::new(id, name, TypeKind::EdgeLabel)
    }

    fn new(id: TypeId, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            multiplicity: Multiplicity::default(),
            sort_key: SmallVec::new(),
            sort_order: SortOrder::default(),
        }
    }

    /// Sets the multiplicity.
    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Sets the sort key and the order applied across it.
    pub fn with_sort_key(mut self, key: &[TypeId], order: SortOrder) -> Self {
        self.sort_key = SmallVec::from_slice(key);
        self.sort_order = order;
        self
    }

    /// Canonical type id.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this type is a property key (as opposed to an edge label).
    pub fn is_property_key(&self) -> bool {
        self.kind == TypeKind::PropertyKey
    }

    /// Multiplicity constraint.
    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    /// Sort key type ids, in declared order.
    pub fn sort_key(&self) -> &[TypeId] {
        &self.sort_key
    }

    /// Order applied across the sort key.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

/// Registry mapping type ids to definitions.
///
/// Shared via `Arc` across transactions; definitions may still be added while
/// shared, but a registry visible to a running sort must not redefine types.
#[derive(Default)]
pub struct SchemaRegistry {
    types: RwLock<FxHashMap<TypeId, Arc<RelationType>>>,
    by_name: RwLock<FxHashMap<String, TypeId>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type definition, rejecting duplicate ids or names.
    pub fn define(&self, ty: RelationType) -> Result<Arc<RelationType>> {
        let mut types = self.types.write();
        let mut by_name = self.by_name.write();
        if types.contains_key(&ty.id) {
            return Err(GraphError::Invalid("duplicate relation type id"));
        }
        if by_name.contains_key(ty.name()) {
            return Err(GraphError::Invalid("duplicate relation type name"));
        }
        trace!(id = %ty.id, name = ty.name(), "schema.define");
        let ty = Arc::new(ty);
        by_name.insert(ty.name().to_owned(), ty.id);
        types.insert(ty.id, Arc::clone(&ty));
        Ok(ty)
    }

    /// Resolves a type id, failing with `UnknownType` if it was never
    /// defined.
    pub fn resolve(&self, id: TypeId) -> Result<Arc<RelationType>> {
        self.types
            .read()
            .get(&id)
            .cloned()
            .ok_or(GraphError::UnknownType(id))
    }

    /// Looks up a type id by schema name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.read().get(name).copied()
    }
}
