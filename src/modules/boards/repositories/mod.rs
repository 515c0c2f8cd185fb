pub mod board_repository;

pub use board_repository::BoardRepository;
