//! Capability contracts the engine is generic over, plus sample
//! implementations.
//!
//! [`Node`] says how a range summary is built and merged; [`Update`] says
//! how a pending modification changes a summary, batches with later
//! modifications, and lands on a single element.

mod api;
mod nodes;
mod updates;

pub use api::{Node, Update};
pub use nodes::{MaxNode, MinNode, SumNode};
pub use updates::{Add, Affine, Assign};
