use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ResourceMapper;

/// Stored representation of a product. Category and product type are free
/// text; the byCategory/byProductType queries match them case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub product_type: Option<String>,
}

/// Output representation returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub product_type: Option<String>,
}

/// Input representation accepted for create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyProductDto {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub product_type: Option<String>,
}

pub struct ProductMapper;

impl ResourceMapper for ProductMapper {
    type Entity = Product;
    type Dto = ProductDto;
    type ModifyDto = ModifyProductDto;

    const RESOURCE: &'static str = "Product";

    fn to_dto(entity: Product) -> ProductDto {
        ProductDto {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            description: entity.description,
            price: entity.price,
            product_type: entity.product_type,
        }
    }

    fn from_modify(id: Option<i64>, modify: ModifyProductDto) -> Product {
        Product {
            id,
            name: modify.name,
            category: modify.category,
            description: modify.description,
            price: modify.price,
            product_type: modify.product_type,
        }
    }

    fn to_modify(entity: Product) -> ModifyProductDto {
        ModifyProductDto {
            name: entity.name,
            category: entity.category,
            description: entity.description,
            price: entity.price,
            product_type: entity.product_type,
        }
    }
}
