mod moderated_objects;
mod reports;
mod root;

pub use moderated_objects::*;
pub use reports::*;
pub use root::*;
