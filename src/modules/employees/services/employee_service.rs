use crate::core::CrudService;
use crate::modules::employees::models::EmployeeMapper;
use crate::modules::employees::repositories::EmployeeRepository;

/// Employee service: the shared CRUD operations, nothing more.
pub type EmployeeService = CrudService<EmployeeRepository, EmployeeMapper>;
