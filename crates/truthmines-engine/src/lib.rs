//! Truth Mines Analysis Engine
//!
//! Epistemic analysis over a knowledge graph of propositions, theorems and
//! axioms connected by typed, weighted relations.
//!
//! ## Analyses
//!
//! - **Parser**: compact relation blocks into [`Edge`](truthmines_domain::Edge) values
//! - **Neighbors**: bounded, undirected hop distances around a focus node
//! - **Tension**: how strongly a node is both supported and attacked
//! - **Focus path**: strongest justification chain back to a foundation,
//!   or the coherentist cycle the search runs into
//! - **Salience**: combined visual weight of every node for the current focus
//! - **Attacks / bridges**: incoming challenges and cross-domain links of a node
//! - **Depth / load-bearing**: structural position of nodes in the graph
//!
//! ## Architecture
//!
//! - Every analysis is a synchronous function over borrowed inputs
//! - Calibration constants come from [`EngineConfig`]
//! - Malformed input is dropped, never reported; only loading is fallible
//!
//! ## Example
//!
//! ```
//! use truthmines_engine::Engine;
//!
//! let engine = Engine::default();
//! let edges = engine.parse_edges("supports[2]{f,t,w,d}:\na,b,0.9,philosophy\nb,c,0.8,philosophy\n");
//!
//! let path = engine.compute_focus_path(Some("c"), &edges).unwrap();
//! assert_eq!(path.path, vec!["a", "b", "c"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attacks;
pub mod bridges;
pub mod config;
pub mod depth;
pub mod engine;
pub mod error;
pub mod filter;
pub mod focus_path;
pub mod load_bearing;
pub mod loader;
pub mod neighbors;
pub mod parser;
pub mod salience;
pub mod tension;

mod graph;

pub use attacks::{incoming_attacks, Challenge, Severity};
pub use bridges::{cross_domain_links, BridgeLink, CrossDomainLinks};
pub use config::{EngineConfig, SalienceWeights};
pub use depth::compute_depths;
pub use engine::{Engine, FocusAnalysis};
pub use error::{EngineError, Result};
pub use filter::filter_by_domain;
pub use focus_path::compute_focus_path;
pub use load_bearing::compute_load_bearing;
pub use loader::{load_nodes, load_nodes_from_dir, parse_graph_summary, parse_node};
pub use neighbors::compute_neighbors;
pub use parser::parse_edges;
pub use salience::{compute_salience, opacity_scale, show_label, size_scale};
pub use tension::{compute_tension, tension_breakdown, tension_map, TensionBreakdown};
