pub mod board;

pub use board::{Board, BoardDto, BoardMapper, ModifyBoardDto};
