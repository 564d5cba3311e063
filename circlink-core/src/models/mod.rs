pub mod gene;
pub mod histogram;
pub mod module;

// re-exports
pub use gene::*;
pub use histogram::*;
pub use module::*;
