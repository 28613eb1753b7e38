pub use msg::*;
pub use snapshot::*;
pub use types::*;

mod msg;
mod snapshot;
mod types;
