pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ModifyProductDto, Product, ProductDto, ProductMapper};
pub use repositories::ProductRepository;
pub use services::ProductService;
