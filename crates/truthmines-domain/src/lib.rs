//! Truth Mines Domain Layer
//!
//! This crate holds the value types shared by the analysis engine and its
//! consumers. It contains no algorithms: everything here is data plus the
//! classification rules that decide how the engine treats that data.
//!
//! ## Key Concepts
//!
//! - **Node**: a proposition, theorem or axiom in the knowledge graph
//! - **Edge**: a typed, optionally weighted relation between two nodes
//! - **Relation**: the closed vocabulary of edge types and their classes
//! - **Bridge**: an edge whose domain tag crosses between knowledge domains
//! - **PathResult**: the strongest justification chain found for a node
//!
//! ## Architecture
//!
//! - Pure value types only
//! - Serde derives so edges and nodes can be read from the data loader's JSON
//! - Algorithms live in `truthmines-engine`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod node;
pub mod path;
pub mod relation;

// Re-exports for convenience
pub use edge::{BridgeDomains, Edge};
pub use node::Node;
pub use path::{PathResult, PathType};
pub use relation::{Relation, RelationClass};

/// Node identifiers are opaque strings (6-character ids in the published graph)
pub type NodeId = String;
