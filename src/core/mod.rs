pub mod crud;
pub mod error;
pub mod traits;

pub use crud::CrudService;
pub use error::{AppError, Result};
pub use traits::{CrudRepository, ResourceMapper};
