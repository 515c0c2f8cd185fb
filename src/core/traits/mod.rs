pub mod mapper;
pub mod repository;

pub use mapper::ResourceMapper;
pub use repository::CrudRepository;
