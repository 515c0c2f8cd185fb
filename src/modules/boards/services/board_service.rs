use crate::core::CrudService;
use crate::modules::boards::models::BoardMapper;
use crate::modules::boards::repositories::BoardRepository;

/// Board service: the shared CRUD operations, nothing more.
pub type BoardService = CrudService<BoardRepository, BoardMapper>;
