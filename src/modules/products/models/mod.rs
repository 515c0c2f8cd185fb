pub mod product;

pub use product::{ModifyProductDto, Product, ProductDto, ProductMapper};
