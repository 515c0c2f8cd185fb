use crate::core::error::Result;
use crate::core::{CrudService, ResourceMapper};
use crate::modules::products::models::{ProductDto, ProductMapper};
use crate::modules::products::repositories::ProductRepository;

/// Product service: the shared CRUD operations plus the two filter queries.
pub type ProductService = CrudService<ProductRepository, ProductMapper>;

impl CrudService<ProductRepository, ProductMapper> {
    /// Products whose category matches, ignoring case. Empty list when
    /// nothing matches, never an error.
    pub async fn get_all_by_category(&self, category: &str) -> Result<Vec<ProductDto>> {
        let products = self.repository().find_all_by_category(category).await?;
        tracing::info!(category, count = products.len(), "received products by category");
        Ok(products.into_iter().map(ProductMapper::to_dto).collect())
    }

    /// Products whose product type matches, ignoring case.
    pub async fn get_all_by_product_type(&self, product_type: &str) -> Result<Vec<ProductDto>> {
        let products = self
            .repository()
            .find_all_by_product_type(product_type)
            .await?;
        tracing::info!(
            product_type,
            count = products.len(),
            "received products by product type"
        );
        Ok(products.into_iter().map(ProductMapper::to_dto).collect())
    }
}
