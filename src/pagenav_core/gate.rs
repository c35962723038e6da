mod builtin;
mod policy;
mod types;

pub use builtin::*;
pub use policy::*;
pub use types::*;
