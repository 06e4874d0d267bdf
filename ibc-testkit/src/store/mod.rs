mod in_memory;
mod revertible;

pub use in_memory::*;
pub use revertible::*;
