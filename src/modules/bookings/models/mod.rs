pub mod booking;

pub use booking::{Booking, BookingDto, BookingMapper, ModifyBookingDto};
