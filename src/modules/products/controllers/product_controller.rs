use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::ModifyProductDto;
use crate::modules::products::services::ProductService;

/// List all products
/// GET /products
pub async fn get_all_products(
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let products = service.get_all().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// List products by category, ignoring case
/// GET /products/byCategory/{category}
pub async fn get_all_products_by_category(
    service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let products = service.get_all_by_category(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// List products by product type, ignoring case
/// GET /products/byProductType/{productType}
pub async fn get_all_products_by_product_type(
    service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let products = service.get_all_by_product_type(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Get product by ID
/// GET /products/{id}
pub async fn get_product_by_id(
    service: web::Data<ProductService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Create a new product
/// POST /products
pub async fn add_product(
    service: web::Data<ProductService>,
    body: web::Json<ModifyProductDto>,
) -> Result<HttpResponse, AppError> {
    let product = service.add(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Replace a product wholesale
/// PUT /products/update/{id}
pub async fn update_product(
    service: web::Data<ProductService>,
    path: web::Path<i64>,
    body: web::Json<ModifyProductDto>,
) -> Result<HttpResponse, AppError> {
    let product = service.update(path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Delete a product, returning the pre-deletion representation
/// DELETE /products/delete/{id}
pub async fn delete_product_by_id(
    service: web::Data<ProductService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(get_all_products))
            .route("", web::post().to(add_product))
            .route("/byCategory/{category}", web::get().to(get_all_products_by_category))
            .route(
                "/byProductType/{productType}",
                web::get().to(get_all_products_by_product_type),
            )
            .route("/{id}", web::get().to(get_product_by_id))
            .route("/update/{id}", web::put().to(update_product))
            .route("/delete/{id}", web::delete().to(delete_product_by_id)),
    );
}
