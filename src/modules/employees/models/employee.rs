use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ResourceMapper;

/// Stored representation of an employee. Salary is a fixed-precision
/// decimal; the repository maps it to a TEXT column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub phone_number: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// Output representation returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub phone_number: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// Input representation accepted for create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyEmployeeDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub salary: Option<Decimal>,
    pub phone_number: Option<String>,
    pub start_date: Option<NaiveDate>,
}

pub struct EmployeeMapper;

impl ResourceMapper for EmployeeMapper {
    type Entity = Employee;
    type Dto = EmployeeDto;
    type ModifyDto = ModifyEmployeeDto;

    const RESOURCE: &'static str = "Employee";

    fn to_dto(entity: Employee) -> EmployeeDto {
        EmployeeDto {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            position: entity.position,
            salary: entity.salary,
            phone_number: entity.phone_number,
            start_date: entity.start_date,
        }
    }

    fn from_modify(id: Option<i64>, modify: ModifyEmployeeDto) -> Employee {
        Employee {
            id,
            first_name: modify.first_name,
            last_name: modify.last_name,
            email: modify.email,
            position: modify.position,
            salary: modify.salary,
            phone_number: modify.phone_number,
            start_date: modify.start_date,
        }
    }

    fn to_modify(entity: Employee) -> ModifyEmployeeDto {
        ModifyEmployeeDto {
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            position: entity.position,
            salary: entity.salary,
            phone_number: entity.phone_number,
            start_date: entity.start_date,
        }
    }
}
