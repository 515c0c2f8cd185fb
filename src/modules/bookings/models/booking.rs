// A table reservation. board_id and employee_id are plain references,
// never checked against the boards/employees tables.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::ResourceMapper;

/// Stored representation of a booking
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Booking {
    pub id: Option<i64>,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<NaiveTime>,
    pub created_at: Option<NaiveDateTime>,
    pub board_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub personal_data: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
}

/// Output representation returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Option<i64>,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<NaiveTime>,
    pub created_at: Option<NaiveDateTime>,
    pub board_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub personal_data: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
}

/// Input representation accepted for create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyBookingDto {
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<NaiveTime>,
    pub created_at: Option<NaiveDateTime>,
    pub board_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub personal_data: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
}

pub struct BookingMapper;

impl ResourceMapper for BookingMapper {
    type Entity = Booking;
    type Dto = BookingDto;
    type ModifyDto = ModifyBookingDto;

    const RESOURCE: &'static str = "Booking";

    fn to_dto(entity: Booking) -> BookingDto {
        BookingDto {
            id: entity.id,
            booking_date: entity.booking_date,
            booking_time: entity.booking_time,
            created_at: entity.created_at,
            board_id: entity.board_id,
            employee_id: entity.employee_id,
            personal_data: entity.personal_data,
            phone_number: entity.phone_number,
            description: entity.description,
        }
    }

    fn from_modify(id: Option<i64>, modify: ModifyBookingDto) -> Booking {
        Booking {
            id,
            booking_date: modify.booking_date,
            booking_time: modify.booking_time,
            created_at: modify.created_at,
            board_id: modify.board_id,
            employee_id: modify.employee_id,
            personal_data: modify.personal_data,
            phone_number: modify.phone_number,
            description: modify.description,
        }
    }

    fn to_modify(entity: Booking) -> ModifyBookingDto {
        ModifyBookingDto {
            booking_date: entity.booking_date,
            booking_time: entity.booking_time,
            created_at: entity.created_at,
            board_id: entity.board_id,
            employee_id: entity.employee_id,
            personal_data: entity.personal_data,
            phone_number: entity.phone_number,
            description: entity.description,
        }
    }
}
