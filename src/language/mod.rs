// Language definitions and the registry they are looked up in

pub mod javascript;
mod registry;
mod source;
mod types;

// Re-export all public symbols
pub use registry::*;
pub use source::*;
pub use types::*;
