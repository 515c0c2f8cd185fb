use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};

use crate::core::error::{AppError, Result};
use crate::core::traits::CrudRepository;
use crate::modules::employees::models::Employee;

const COLUMNS: &str = "id, first_name, last_name, email, position, salary, \
                       phone_number, start_date";

/// Repository for employee database operations
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for EmployeeRepository {
    type Entity = Employee;

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!("SELECT {COLUMNS} FROM employees"))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(EmployeeRow::into_employee).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let row =
            sqlx::query_as::<_, EmployeeRow>(&format!("SELECT {COLUMNS} FROM employees WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(EmployeeRow::into_employee).transpose()
    }

    async fn save(&self, employee: Employee) -> Result<Employee> {
        let salary = employee.salary.map(|s| s.to_string());
        let row = match employee.id {
            Some(id) => {
                sqlx::query_as::<_, EmployeeRow>(
                    "UPDATE employees SET first_name = ?, last_name = ?, email = ?, \
                     position = ?, salary = ?, phone_number = ?, start_date = ? \
                     WHERE id = ? RETURNING *",
                )
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .bind(&employee.position)
                .bind(&salary)
                .bind(&employee.phone_number)
                .bind(employee.start_date)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, EmployeeRow>(
                    "INSERT INTO employees (first_name, last_name, email, position, salary, \
                     phone_number, start_date) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
                )
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .bind(&employee.position)
                .bind(&salary)
                .bind(&employee.phone_number)
                .bind(employee.start_date)
                .fetch_one(&self.pool)
                .await?
            }
        };
        row.into_employee()
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// SQLite has no decimal type; salary is stored as TEXT and parsed here.
#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    position: Option<String>,
    salary: Option<String>,
    phone_number: Option<String>,
    start_date: Option<NaiveDate>,
}

impl EmployeeRow {
    fn into_employee(self) -> Result<Employee> {
        let salary = self
            .salary
            .as_deref()
            .map(Decimal::from_str)
            .transpose()
            .map_err(|e| AppError::internal(format!("invalid salary in database: {e}")))?;

        Ok(Employee {
            id: Some(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            position: self.position,
            salary,
            phone_number: self.phone_number,
            start_date: self.start_date,
        })
    }
}
