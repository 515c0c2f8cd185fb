pub mod employee;

pub use employee::{Employee, EmployeeDto, EmployeeMapper, ModifyEmployeeDto};
