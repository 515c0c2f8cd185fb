use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::employees::models::ModifyEmployeeDto;
use crate::modules::employees::services::EmployeeService;

/// List all employees
/// GET /employees
pub async fn get_all_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.get_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get employee by ID
/// GET /employees/{id}
pub async fn get_employee_by_id(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create a new employee
/// POST /employees
pub async fn add_employee(
    service: web::Data<EmployeeService>,
    body: web::Json<ModifyEmployeeDto>,
) -> Result<HttpResponse, AppError> {
    let employee = service.add(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Replace an employee wholesale
/// PUT /employees/update/{id}
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
    body: web::Json<ModifyEmployeeDto>,
) -> Result<HttpResponse, AppError> {
    let employee = service.update(path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete an employee, returning the pre-deletion representation
/// DELETE /employees/delete/{id}
pub async fn delete_employee_by_id(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Configure employee routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("", web::get().to(get_all_employees))
            .route("", web::post().to(add_employee))
            .route("/{id}", web::get().to(get_employee_by_id))
            .route("/update/{id}", web::put().to(update_employee))
            .route("/delete/{id}", web::delete().to(delete_employee_by_id)),
    );
}
