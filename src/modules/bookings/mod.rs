pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Booking, BookingDto, BookingMapper, ModifyBookingDto};
pub use repositories::BookingRepository;
pub use services::BookingService;
