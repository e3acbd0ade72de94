//! Block-rendering adapters for the resonator bank.
//!
//! Graph nodes wrap the low-level DSP primitives with what instrument code
//! needs: note events, parameter modulation, and block-based rendering.

/// Fluent combinators (`.through()`).
pub mod extensions;
/// Resonator bank as an in-place processing node.
pub mod modal;
/// Core traits shared by all graph nodes.
pub mod node;
/// Impulse and noise-burst excitation sources.
pub mod strike;
/// Serial chaining of two nodes (exciter → resonator).
pub mod through;

pub use extensions::NodeExt;
pub use modal::ModalNode;
pub use node::{GraphNode, Modulatable, RenderCtx};
pub use strike::{StrikeNode, StrikeShape};
