mod test_db;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use restaurant_manager::bookings::{BookingRepository, BookingService, ModifyBookingDto};
use restaurant_manager::core::AppError;
use sqlx::SqlitePool;

fn booking_service(pool: SqlitePool) -> BookingService {
    BookingService::new(BookingRepository::new(pool))
}

fn empty_modify_booking() -> ModifyBookingDto {
    ModifyBookingDto {
        booking_date: None,
        booking_time: None,
        created_at: None,
        board_id: None,
        employee_id: None,
        personal_data: None,
        phone_number: None,
        description: None,
    }
}

fn full_modify_booking() -> ModifyBookingDto {
    ModifyBookingDto {
        booking_date: NaiveDate::from_ymd_opt(2026, 8, 14),
        booking_time: NaiveTime::from_hms_opt(19, 0, 0),
        created_at: created_at(),
        board_id: Some(3),
        employee_id: Some(5),
        personal_data: Some("Jane Doe".to_string()),
        phone_number: Some("555-0101".to_string()),
        description: Some("Anniversary dinner".to_string()),
    }
}

fn created_at() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2026, 8, 7).and_then(|d| d.and_hms_opt(10, 15, 0))
}

#[tokio::test]
async fn add_persists_all_fields_including_dates_and_times() {
    let service = booking_service(test_db::memory_pool().await);

    let added = service.add(full_modify_booking()).await.unwrap();
    let id = added.id.expect("id assigned on save");
    assert!(id > 0);

    let fetched = service.get_by_id(id).await.unwrap();
    assert_eq!(fetched.booking_date, NaiveDate::from_ymd_opt(2026, 8, 14));
    assert_eq!(fetched.booking_time, NaiveTime::from_hms_opt(19, 0, 0));
    assert_eq!(fetched.created_at, created_at());
    assert_eq!(fetched.board_id, Some(3));
    assert_eq!(fetched.employee_id, Some(5));
    assert_eq!(fetched.personal_data.as_deref(), Some("Jane Doe"));
    assert_eq!(fetched, added);
}

#[tokio::test]
async fn add_accepts_a_booking_with_every_field_null() {
    let service = booking_service(test_db::memory_pool().await);

    // No validation anywhere: an all-null booking is stored as-is.
    let added = service.add(empty_modify_booking()).await.unwrap();
    let fetched = service.get_by_id(added.id.unwrap()).await.unwrap();

    assert_eq!(fetched.booking_date, None);
    assert_eq!(fetched.personal_data, None);
    assert_eq!(fetched.board_id, None);
}

#[tokio::test]
async fn board_and_employee_references_are_not_checked() {
    let service = booking_service(test_db::memory_pool().await);

    // No boards or employees exist, yet the booking saves fine.
    let mut modify = full_modify_booking();
    modify.board_id = Some(424242);
    modify.employee_id = Some(424242);

    let added = service.add(modify).await.unwrap();
    assert_eq!(added.board_id, Some(424242));
    assert_eq!(added.employee_id, Some(424242));
}

#[tokio::test]
async fn update_overwrites_wholesale_nulling_omitted_fields() {
    let service = booking_service(test_db::memory_pool().await);

    let added = service.add(full_modify_booking()).await.unwrap();
    let id = added.id.unwrap();

    let mut sparse = empty_modify_booking();
    sparse.personal_data = Some("John Smith".to_string());

    let updated = service.update(id, sparse).await.unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.personal_data.as_deref(), Some("John Smith"));
    assert_eq!(updated.booking_date, None);
    assert_eq!(updated.booking_time, None);
    assert_eq!(updated.created_at, None);
    assert_eq!(updated.board_id, None);
    assert_eq!(updated.phone_number, None);

    let fetched = service.get_by_id(id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn not_found_contract_applies_to_all_precondition_lookups() {
    let service = booking_service(test_db::memory_pool().await);

    let err = service.get_by_id(7).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Booking with id=7 not found");

    let err = service.update(7, empty_modify_booking()).await.unwrap_err();
    assert_eq!(err.to_string(), "Booking with id=7 not found");

    let err = service.delete_by_id(7).await.unwrap_err();
    assert_eq!(err.to_string(), "Booking with id=7 not found");
}

#[tokio::test]
async fn delete_returns_the_snapshot_captured_before_removal() {
    let service = booking_service(test_db::memory_pool().await);

    let added = service.add(full_modify_booking()).await.unwrap();
    let id = added.id.unwrap();

    let removed = service.delete_by_id(id).await.unwrap();
    assert_eq!(removed, added);

    assert!(service.get_by_id(id).await.is_err());
    assert!(service.get_all().await.unwrap().is_empty());
}
