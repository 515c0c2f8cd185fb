use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};

use crate::core::error::{AppError, Result};
use crate::core::traits::CrudRepository;
use crate::modules::products::models::Product;

const COLUMNS: &str = "id, name, category, description, price, product_type";

/// Repository for product database operations. Besides the shared CRUD
/// contract it answers the case-insensitive category and product-type
/// filter queries.
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Case-insensitive exact match on category
    pub async fn find_all_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {COLUMNS} FROM products WHERE LOWER(category) = LOWER(?)"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ProductRow::into_product).collect()
    }

    /// Case-insensitive exact match on product type
    pub async fn find_all_by_product_type(&self, product_type: &str) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {COLUMNS} FROM products WHERE LOWER(product_type) = LOWER(?)"
        ))
        .bind(product_type)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ProductRow::into_product).collect()
    }
}

#[async_trait]
impl CrudRepository for ProductRepository {
    type Entity = Product;

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("SELECT {COLUMNS} FROM products"))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let row =
            sqlx::query_as::<_, ProductRow>(&format!("SELECT {COLUMNS} FROM products WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(ProductRow::into_product).transpose()
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let price = product.price.map(|p| p.to_string());
        let row = match product.id {
            Some(id) => {
                sqlx::query_as::<_, ProductRow>(
                    "UPDATE products SET name = ?, category = ?, description = ?, price = ?, \
                     product_type = ? WHERE id = ? RETURNING *",
                )
                .bind(&product.name)
                .bind(&product.category)
                .bind(&product.description)
                .bind(&price)
                .bind(&product.product_type)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProductRow>(
                    "INSERT INTO products (name, category, description, price, product_type) \
                     VALUES (?, ?, ?, ?, ?) RETURNING *",
                )
                .bind(&product.name)
                .bind(&product.category)
                .bind(&product.description)
                .bind(&price)
                .bind(&product.product_type)
                .fetch_one(&self.pool)
                .await?
            }
        };
        row.into_product()
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// SQLite has no decimal type; price is stored as TEXT and parsed here.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    price: Option<String>,
    product_type: Option<String>,
}

impl ProductRow {
    fn into_product(self) -> Result<Product> {
        let price = self
            .price
            .as_deref()
            .map(Decimal::from_str)
            .transpose()
            .map_err(|e| AppError::internal(format!("invalid price in database: {e}")))?;

        Ok(Product {
            id: Some(self.id),
            name: self.name,
            category: self.category,
            description: self.description,
            price,
            product_type: self.product_type,
        })
    }
}
