pub mod boards;
pub mod bookings;
pub mod employees;
pub mod products;
