use smallvec::SmallVec;

use crate::model::PropValue;
use crate::types::{RelationId, TypeId, VertexId};

/// Direction of a relation as seen from one of its endpoints.
///
/// `Both` only appears in query contexts; a concrete relation endpoint always
/// resolves to `Out` or `In`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// The vertex is the relation's source endpoint.
    Out,
    /// The vertex is the relation's target endpoint.
    In,
    /// Either direction; query-only.
    Both,
}

impl Direction {
    /// Maps `Out` to `In` and back; `Both` is its own opposite.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Out => Direction::In,
            Direction::In => Direction::Out,
            Direction::Both => Direction::Both,
        }
    }

    /// Direction an endpoint slot represents: slot 0 is the source (`Out`),
    /// slot 1 the target (`In`).
    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Direction::Out),
            1 => Some(Direction::In),
            _ => None,
        }
    }
}

/// A relation incident on one or two vertices.
///
/// Properties bind a scalar value to a single vertex; edges connect a source
/// (slot 0, `Out`) to a target (slot 1, `In`), possibly the same vertex for a
/// self-loop. Either kind may additionally carry decorating values keyed by
/// type id; sort-key and order-list evaluation reads those.
#[derive(Clone, Debug)]
pub enum Relation {
    /// Scalar value bound to a vertex under a property key.
    Property {
        /// Unique relation identifier.
        id: RelationId,
        /// The property key's type id.
        key: TypeId,
        /// The owning vertex.
        vertex: VertexId,
        /// The bound value.
        value: PropValue,
        /// Decorating values on the property itself.
        props: SmallVec<[(TypeId, PropValue); 2]>,
    },
    /// Edge between a source and a target vertex under an edge label.
    Edge {
        /// Unique relation identifier.
        id: RelationId,
        /// The edge label's type id.
        label: TypeId,
        /// Source at slot 0, target at slot 1.
        endpoints: [VertexId; 2],
        /// Decorating values on the edge.
        props: SmallVec<[(TypeId, PropValue); 2]>,
    },
}

impl Relation {
    /// Creates a property relation binding `value` to `vertex` under `key`.
    pub fn new_property(
        id: RelationId,
        key: TypeId,
        vertex: VertexId,
        value: impl Into<PropValue>,
    ) -> Self {
        Relation::Property {
            id,
            key,
            vertex,
            value: value.into(),
            props: SmallVec::new(),
        }
    }

    /// Creates an edge relation from `src` to `dst` under `label`.
    pub fn new_edge(id: RelationId, label: TypeId, src: VertexId, dst: VertexId) -> Self {
        Relation::Edge {
            id,
            label,
            endpoints: [src, dst],
            props: SmallVec::new(),
        }
    }

    /// Sets the decorating value for `ty`, replacing any existing one.
    pub fn set_prop(&mut self, ty: TypeId, value: impl Into<PropValue>) {
        let props = match self {
            Relation::Property { props, .. } | Relation::Edge { props, .. } => props,
        };
        let value = value.into();
        if let Some(slot) = props.iter_mut().find(|(id, _)| *id == ty) {
            slot.1 = value;
        } else {
            props.push((ty, value));
        }
    }

    /// Fluent variant of [`Relation::set_prop`] for construction sites.
    pub fn with_prop(mut self, ty: TypeId, value: impl Into<PropValue>) -> Self {
        self.set_prop(ty, value);
        self
    }

    /// The relation's unique identifier.
    pub fn id(&self) -> RelationId {
        match self {
            Relation::Property { id, .. } | Relation::Edge { id, .. } => *id,
        }
    }

    /// The schema type id this relation instantiates.
    pub fn type_id(&self) -> TypeId {
        match self {
            Relation::Property { key, .. } => *key,
            Relation::Edge { label, .. } => *label,
        }
    }

    /// Whether this relation is a property.
    pub fn is_property(&self) -> bool {
        matches!(self, Relation::Property { .. })
    }

    /// Number of endpoint slots: 1 for properties, 2 for edges.
    pub fn endpoint_count(&self) -> usize {
        match self {
            Relation::Property { .. } => 1,
            Relation::Edge { .. } => 2,
        }
    }

    /// The vertex at endpoint slot `position`, if the slot exists.
    pub fn endpoint(&self, position: usize) -> Option<VertexId> {
        match self {
            Relation::Property { vertex, .. } => (position == 0).then_some(*vertex),
            Relation::Edge { endpoints, .. } => endpoints.get(position).copied(),
        }
    }

    /// First endpoint slot occupied by `vertex`, if the relation touches it.
    ///
    /// For a self-loop both slots match and slot 0 wins, so self-loops read
    /// as `Out`.
    pub fn incident_position(&self, vertex: VertexId) -> Option<usize> {
        (0..self.endpoint_count()).find(|&pos| self.endpoint(pos) == Some(vertex))
    }

    /// Direction this relation represents from `vertex`'s viewpoint; `None`
    /// if the relation is not incident on it.
    pub fn direction_from(&self, vertex: VertexId) -> Option<Direction> {
        self.incident_position(vertex).and_then(Direction::from_position)
    }

    /// The value this relation carries for `ty`.
    ///
    /// A property relation's own key yields its bound value; any other type
    /// id (property key or edge label alike) consults the decoration list.
    pub fn value_for(&self, ty: TypeId) -> Option<&PropValue> {
        if let Relation::Property { key, value, .. } = self {
            if *key == ty {
                return Some(value);
            }
        }
        let props = match self {
            Relation::Property { props, .. } | Relation::Edge { props, .. } => props,
        };
        props.iter().find_map(|(id, v)| (*id == ty).then_some(v))
    }
}
