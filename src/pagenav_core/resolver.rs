mod deep_link;
mod destination;

pub use deep_link::*;
pub use destination::*;
