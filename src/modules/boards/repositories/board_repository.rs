use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::error::Result;
use crate::core::traits::CrudRepository;
use crate::modules::boards::models::Board;

/// Repository for board database operations
pub struct BoardRepository {
    pool: SqlitePool,
}

impl BoardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for BoardRepository {
    type Entity = Board;

    async fn find_all(&self) -> Result<Vec<Board>> {
        let boards = sqlx::query_as::<_, Board>(
            "SELECT id, number_of_seats, board_description FROM boards",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(boards)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Board>> {
        let board = sqlx::query_as::<_, Board>(
            "SELECT id, number_of_seats, board_description FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(board)
    }

    async fn save(&self, board: Board) -> Result<Board> {
        let saved = match board.id {
            Some(id) => {
                sqlx::query_as::<_, Board>(
                    "UPDATE boards SET number_of_seats = ?, board_description = ? \
                     WHERE id = ? RETURNING *",
                )
                .bind(board.number_of_seats)
                .bind(&board.board_description)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Board>(
                    "INSERT INTO boards (number_of_seats, board_description) \
                     VALUES (?, ?) RETURNING *",
                )
                .bind(board.number_of_seats)
                .bind(&board.board_description)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
