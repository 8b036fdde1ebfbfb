pub mod product;
pub mod pagination;

pub use product::*;
pub use pagination::*;
