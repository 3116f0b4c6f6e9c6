pub mod dates;
pub mod model;

pub use model::{Category, CustomerRecord};
