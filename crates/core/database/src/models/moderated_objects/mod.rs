mod model;
mod ops;
mod query;
mod target;

pub use model::*;
pub use ops::*;
pub use query::*;
pub use target::*;
