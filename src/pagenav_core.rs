mod config;
mod error;
mod gate;
mod host;
mod navigator;
mod resolver;
mod route;
mod state;
mod types;

pub use config::*;
pub use error::*;
pub use gate::*;
pub use host::*;
pub use navigator::*;
pub use resolver::*;
pub use route::*;
pub use state::*;
pub use types::*;
