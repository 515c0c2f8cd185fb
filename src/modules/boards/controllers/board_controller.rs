use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::boards::models::ModifyBoardDto;
use crate::modules::boards::services::BoardService;

/// List all boards
/// GET /boards
pub async fn get_all_boards(service: web::Data<BoardService>) -> Result<HttpResponse, AppError> {
    let boards = service.get_all().await?;
    Ok(HttpResponse::Ok().json(boards))
}

/// Get board by ID
/// GET /boards/{id}
pub async fn get_board_by_id(
    service: web::Data<BoardService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let board = service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(board))
}

/// Create a new board
/// POST /boards
pub async fn add_board(
    service: web::Data<BoardService>,
    body: web::Json<ModifyBoardDto>,
) -> Result<HttpResponse, AppError> {
    let board = service.add(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(board))
}

/// Replace a board wholesale
/// PUT /boards/update/{id}
pub async fn update_board(
    service: web::Data<BoardService>,
    path: web::Path<i64>,
    body: web::Json<ModifyBoardDto>,
) -> Result<HttpResponse, AppError> {
    let board = service.update(path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(board))
}

/// Delete a board, returning its pre-deletion representation
/// DELETE /boards/delete/{id}
pub async fn delete_board_by_id(
    service: web::Data<BoardService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let board = service.delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(board))
}

/// Configure board routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/boards")
            .route("", web::get().to(get_all_boards))
            .route("", web::post().to(add_board))
            .route("/{id}", web::get().to(get_board_by_id))
            .route("/update/{id}", web::put().to(update_board))
            .route("/delete/{id}", web::delete().to(delete_board_by_id)),
    );
}
