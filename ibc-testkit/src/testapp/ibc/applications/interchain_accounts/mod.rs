mod account;
mod capability;

pub use account::*;
pub use capability::*;
