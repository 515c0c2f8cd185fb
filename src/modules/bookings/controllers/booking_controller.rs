use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::bookings::models::ModifyBookingDto;
use crate::modules::bookings::services::BookingService;

/// List all bookings
/// GET /bookings
pub async fn get_all_bookings(
    service: web::Data<BookingService>,
) -> Result<HttpResponse, AppError> {
    let bookings = service.get_all().await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// Get booking by ID
/// GET /bookings/{id}
pub async fn get_booking_by_id(
    service: web::Data<BookingService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let booking = service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// Create a new booking
/// POST /bookings
pub async fn add_booking(
    service: web::Data<BookingService>,
    body: web::Json<ModifyBookingDto>,
) -> Result<HttpResponse, AppError> {
    let booking = service.add(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// Replace a booking wholesale
/// PUT /bookings/update/{id}
pub async fn update_booking(
    service: web::Data<BookingService>,
    path: web::Path<i64>,
    body: web::Json<ModifyBookingDto>,
) -> Result<HttpResponse, AppError> {
    let booking = service.update(path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// Delete a booking, returning its pre-deletion representation
/// DELETE /bookings/delete/{id}
pub async fn delete_booking_by_id(
    service: web::Data<BookingService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let booking = service.delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .route("", web::get().to(get_all_bookings))
            .route("", web::post().to(add_booking))
            .route("/{id}", web::get().to(get_booking_by_id))
            .route("/update/{id}", web::put().to(update_booking))
            .route("/delete/{id}", web::delete().to(delete_booking_by_id)),
    );
}
