//! Total ordering over a vertex's incident relations.
//!
//! [`RelationComparator`] reconciles four independent ordering concerns into
//! one strict total order: an explicit query-requested order list, the
//! canonical category/type/direction ranking, multiplicity-driven
//! short-circuits, and a final relation-id tie-break. The order is what
//! adjacency iteration, pagination, and relation-cache deduplication sort
//! and binary-search by.

use std::cmp::Ordering;

use tracing::debug;

use crate::model::{Direction, OrderList, PropValue, Relation};
use crate::schema::SortOrder;
use crate::txn::TxContext;
use crate::types::{GraphError, Result, TypeId, VertexId};

/// Compares two optional values under natural ordering.
///
/// An absent value sorts strictly before any present one; two absents tie.
/// Present values must share a natural order; callers that need totality
/// over heterogeneous values use [`PropValue::stable_cmp`] instead of this
/// function.
pub fn compare_values(v1: Option<&PropValue>, v2: Option<&PropValue>) -> Result<Ordering> {
    match (v1, v2) {
        (None, None) => Ok(Ordering::Equal),
        (None, Some(_)) => Ok(Ordering::Less),
        (Some(_), None) => Ok(Ordering::Greater),
        (Some(a), Some(b)) => a
            .partial_cmp_value(b)
            .ok_or(GraphError::Invalid("values do not share a natural order")),
    }
}

/// [`compare_values`] modulated by `order`: under `Desc` the result reverses,
/// so absent values sort last.
pub fn compare_values_ordered(
    v1: Option<&PropValue>,
    v2: Option<&PropValue>,
    order: SortOrder,
) -> Result<Ordering> {
    Ok(order.apply(compare_values(v1, v2)?))
}

/// Total variant used by key resolution: natural order where defined, the
/// stable content fallback otherwise.
fn compare_values_total(
    v1: Option<&PropValue>,
    v2: Option<&PropValue>,
    order: SortOrder,
) -> Ordering {
    let base = match (v1, v2) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.partial_cmp_value(b).unwrap_or_else(|| a.stable_cmp(b)),
    };
    order.apply(base)
}

/// Resolves `type_id` against the transaction's schema and compares the
/// value each relation carries for it, modulated by `order`.
///
/// Property keys and edge labels share the type-id space; either way the
/// relation's stored value for the type is what gets ranked. An id missing
/// from the schema is a fatal lookup failure.
pub fn compare_on_key(
    tx: &TxContext,
    r1: &Relation,
    r2: &Relation,
    type_id: TypeId,
    order: SortOrder,
) -> Result<Ordering> {
    let ty = tx.resolve_type(type_id)?;
    let v1 = r1.value_for(ty.id());
    let v2 = r2.value_for(ty.id());
    Ok(compare_values_total(v1, v2, order))
}

/// Strict-total-order comparator over relations incident on one vertex.
///
/// Comparison stages, each short-circuiting on the first non-equal result:
///
/// 1. identical relation ids compare equal;
/// 2. each explicit order-list entry, via [`compare_on_key`];
/// 3. category — properties before edges;
/// 4. canonical type id;
/// 5. direction from the reference vertex — `Out` before `In`; a relation
///    not incident on that vertex is an internal-consistency error;
/// 6. equal, if the shared type is unique in the resolved direction (type
///    and direction alone identify at most one such relation);
/// 7. the type's schema sort key, under the type's declared sort order;
/// 8. bound values (properties; stable content fallback when natural order
///    is undefined) or opposite endpoints (edges);
/// 9. equal, if the shared type is constrained (endpoints pin the relation);
/// 10. relation id, which keeps the order total.
///
/// Comparisons are pure and read-only; any schema resolution failure
/// propagates unchanged to the caller.
pub struct RelationComparator {
    vertex: VertexId,
    tx: TxContext,
    orders: OrderList,
}

impl RelationComparator {
    /// Comparator over relations incident on `vertex`, with no explicit
    /// order requested.
    pub fn new(vertex: VertexId, tx: TxContext) -> Self {
        Self::with_order(vertex, tx, OrderList::new())
    }

    /// Comparator that evaluates `orders` before the canonical stages.
    pub fn with_order(vertex: VertexId, tx: TxContext, orders: OrderList) -> Self {
        Self { vertex, tx, orders }
    }

    /// The reference vertex every compared relation must be incident on.
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Three-way comparison of two relations incident on the reference
    /// vertex.
    pub fn compare(&self, r1: &Relation, r2: &Relation) -> Result<Ordering> {
        if r1.id() == r2.id() {
            return Ok(Ordering::Equal);
        }

        for entry in self.orders.iter() {
            let ord = compare_on_key(&self.tx, r1, r2, entry.key, entry.order)?;
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }

        let category = category_rank(r1).cmp(&category_rank(r2));
        if category != Ordering::Equal {
            return Ok(category);
        }

        let type_order = r1.type_id().cmp(&r2.type_id());
        if type_order != Ordering::Equal {
            return Ok(type_order);
        }
        let ty = self.tx.resolve_type(r1.type_id())?;

        let p1 = self.incident_position(r1)?;
        let p2 = self.incident_position(r2)?;
        if p1 != p2 {
            // Slot rank doubles as direction rank: Out (0) before In (1).
            return Ok(p1.cmp(&p2));
        }
        let dir = Direction::from_position(p1)
            .ok_or(GraphError::Invalid("endpoint position out of range"))?;

        if ty.multiplicity().is_unique(dir) {
            return Ok(Ordering::Equal);
        }

        for key in ty.sort_key() {
            let ord = compare_on_key(&self.tx, r1, r2, *key, ty.sort_order())?;
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }

        let values = match (r1, r2) {
            (
                Relation::Property { value: a, .. },
                Relation::Property { value: b, .. },
            ) => a.partial_cmp_value(b).unwrap_or_else(|| a.stable_cmp(b)),
            (
                Relation::Edge { endpoints: e1, .. },
                Relation::Edge { endpoints: e2, .. },
            ) => e1[1 - p1].cmp(&e2[1 - p2]),
            _ => {
                return Err(GraphError::Invalid(
                    "mixed relation kinds past category stage",
                ))
            }
        };
        if values != Ordering::Equal {
            return Ok(values);
        }

        if ty.multiplicity().is_constrained() {
            return Ok(Ordering::Equal);
        }

        Ok(r1.id().cmp(&r2.id()))
    }

    /// Sorts `relations` in place under this comparator.
    ///
    /// The first comparison error aborts the sort and is returned; the slice
    /// order is then unspecified, exactly as with any interrupted sort.
    pub fn sort_relations(&self, relations: &mut [Relation]) -> Result<()> {
        debug!(
            vertex = %self.vertex,
            count = relations.len(),
            orders = self.orders.len(),
            "relation.sort"
        );
        let mut failure: Option<GraphError> = None;
        relations.sort_by(|a, b| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            match self.compare(a, b) {
                Ok(ord) => ord,
                Err(err) => {
                    failure = Some(err);
                    Ordering::Equal
                }
            }
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Binary-searches a slice already sorted under this comparator.
    ///
    /// Returns `Ok(index)` of a relation comparing equal to `target`, or the
    /// insertion point as `Err(index)`, inside the outer `Result` carrying
    /// comparison failures.
    pub fn binary_search(
        &self,
        relations: &[Relation],
        target: &Relation,
    ) -> Result<std::result::Result<usize, usize>> {
        let mut failure: Option<GraphError> = None;
        let found = relations.binary_search_by(|probe| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            match self.compare(probe, target) {
                Ok(ord) => ord,
                Err(err) => {
                    failure = Some(err);
                    Ordering::Equal
                }
            }
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(found),
        }
    }

    fn incident_position(&self, relation: &Relation) -> Result<usize> {
        relation
            .incident_position(self.vertex)
            .ok_or(GraphError::NotIncident {
                relation: relation.id(),
                vertex: self.vertex,
            })
    }
}

fn category_rank(relation: &Relation) -> u8 {
    if relation.is_property() {
        1
    } else {
        2
    }
}
