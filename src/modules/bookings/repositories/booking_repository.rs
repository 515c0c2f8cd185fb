use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::error::Result;
use crate::core::traits::CrudRepository;
use crate::modules::bookings::models::Booking;

const COLUMNS: &str = "id, booking_date, booking_time, created_at, board_id, \
                       employee_id, personal_data, phone_number, description";

/// Repository for booking database operations
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for BookingRepository {
    type Entity = Booking;

    async fn find_all(&self) -> Result<Vec<Booking>> {
        let bookings =
            sqlx::query_as::<_, Booking>(&format!("SELECT {COLUMNS} FROM bookings"))
                .fetch_all(&self.pool)
                .await?;
        Ok(bookings)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>> {
        let booking =
            sqlx::query_as::<_, Booking>(&format!("SELECT {COLUMNS} FROM bookings WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(booking)
    }

    async fn save(&self, booking: Booking) -> Result<Booking> {
        let saved = match booking.id {
            Some(id) => {
                sqlx::query_as::<_, Booking>(
                    "UPDATE bookings SET booking_date = ?, booking_time = ?, created_at = ?, \
                     board_id = ?, employee_id = ?, personal_data = ?, phone_number = ?, \
                     description = ? WHERE id = ? RETURNING *",
                )
                .bind(booking.booking_date)
                .bind(booking.booking_time)
                .bind(booking.created_at)
                .bind(booking.board_id)
                .bind(booking.employee_id)
                .bind(&booking.personal_data)
                .bind(&booking.phone_number)
                .bind(&booking.description)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Booking>(
                    "INSERT INTO bookings (booking_date, booking_time, created_at, board_id, \
                     employee_id, personal_data, phone_number, description) \
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
                )
                .bind(booking.booking_date)
                .bind(booking.booking_time)
                .bind(booking.created_at)
                .bind(booking.board_id)
                .bind(booking.employee_id)
                .bind(&booking.personal_data)
                .bind(&booking.phone_number)
                .bind(&booking.description)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
