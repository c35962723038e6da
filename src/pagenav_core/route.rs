mod meta;
mod table;

pub use meta::*;
pub use table::*;
