use crate::core::CrudService;
use crate::modules::bookings::models::BookingMapper;
use crate::modules::bookings::repositories::BookingRepository;

/// Booking service: the shared CRUD operations, nothing more.
pub type BookingService = CrudService<BookingRepository, BookingMapper>;
