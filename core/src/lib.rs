pub use error::*;
pub use grid::*;
pub use input::*;
pub use phase::*;
pub use render::*;
pub use sidebar::*;
pub use store::*;

mod error;
mod grid;
mod input;
mod phase;
mod render;
mod sidebar;
mod store;
