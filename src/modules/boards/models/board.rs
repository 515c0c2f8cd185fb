// A board is a restaurant table. Bookings reference boards by id, but the
// reference is not enforced anywhere in this layer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::ResourceMapper;

/// Stored representation of a board
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Board {
    pub id: Option<i64>,
    pub number_of_seats: Option<i64>,
    pub board_description: Option<String>,
}

/// Output representation returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub id: Option<i64>,
    pub number_of_seats: Option<i64>,
    pub board_description: Option<String>,
}

/// Input representation accepted for create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyBoardDto {
    pub number_of_seats: Option<i64>,
    pub board_description: Option<String>,
}

pub struct BoardMapper;

impl ResourceMapper for BoardMapper {
    type Entity = Board;
    type Dto = BoardDto;
    type ModifyDto = ModifyBoardDto;

    const RESOURCE: &'static str = "Board";

    fn to_dto(entity: Board) -> BoardDto {
        BoardDto {
            id: entity.id,
            number_of_seats: entity.number_of_seats,
            board_description: entity.board_description,
        }
    }

    fn from_modify(id: Option<i64>, modify: ModifyBoardDto) -> Board {
        Board {
            id,
            number_of_seats: modify.number_of_seats,
            board_description: modify.board_description,
        }
    }

    fn to_modify(entity: Board) -> ModifyBoardDto {
        ModifyBoardDto {
            number_of_seats: entity.number_of_seats,
            board_description: entity.board_description,
        }
    }
}
