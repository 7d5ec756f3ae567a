//! # AutoDoc Graph
//!
//! Deterministic structure graph over an ingested entry forest.
//!
//! ## Architecture
//!
//! ```text
//! Entry forest
//!     │
//!     ├──> Graph Builder (pre-order flatten)
//!     │      ├─ Nodes: one per entry (id = path)
//!     │      └─ Edges: parent → child
//!     │
//!     └──> Layered Layout
//!            ├─ Rank by depth from forest roots
//!            ├─ Order within rank (barycenter sweeps)
//!            └─ Grid coordinates (configurable spacing)
//! ```
//!
//! Layout is a pure function of the node/edge lists in their given order:
//! identical input always yields bit-identical coordinates.

mod builder;
mod layout;
mod types;

pub use builder::build_graph;
pub use layout::{layout, LayoutConfig, PositionedNode};
pub use types::{FileGraph, GraphEdge, GraphNode};
