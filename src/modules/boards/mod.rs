pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Board, BoardDto, BoardMapper, ModifyBoardDto};
pub use repositories::BoardRepository;
pub use services::BoardService;
