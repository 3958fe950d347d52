//! Relation ordering for the Umbra property-graph engine.
//!
//! A vertex owns an unordered bag of incident relations (properties and
//! edges). Adjacency iteration, pagination, cache deduplication, and
//! multiplicity enforcement all need one deterministic total order over that
//! bag; [`order::RelationComparator`] defines it. The surrounding modules
//! supply the in-memory element model, the schema registry describing
//! relation types, and the read-only transaction context the comparator
//! resolves type ids through.

#![warn(missing_docs)]

pub mod model;
pub mod order;
pub mod schema;
pub mod txn;
pub mod types;
