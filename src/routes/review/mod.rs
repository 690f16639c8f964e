mod add;
mod approve;
mod delete;
mod get;

pub use add::*;
pub use approve::*;
pub use delete::*;
pub use get::*;
