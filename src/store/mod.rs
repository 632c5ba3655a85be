pub mod intent;
pub mod state;
pub mod transition;

pub use intent::Intent;
pub use state::{Hierarchy, Selection};
pub use transition::apply;
