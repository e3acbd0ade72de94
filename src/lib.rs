pub mod dsp;
pub mod graph; // Block-rendering nodes over the resonator bank
pub mod module; // Knobs, CV inputs and output scaling for hosts

pub use module::{CvInputs, ModalModule, ModalParam, ModuleConfig};

pub const MAX_BLOCK_SIZE: usize = 2048;
