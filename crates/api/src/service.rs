//! Employee service: the business-logic layer between HTTP handlers and
//! the repository.
//!
//! Every operation is a single awaited pass over the repository; no state
//! is shared between requests beyond the database itself.

use sqlx::PgPool;
use staffdir_core::error::CoreError;
use staffdir_core::types::DbId;
use staffdir_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use staffdir_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};

pub struct EmployeeService;

impl EmployeeService {
    /// Create an employee, enforcing email uniqueness.
    ///
    /// The `find_by_email` pre-check exists to produce a precise Conflict
    /// message without touching the table. It is not the real guard: two
    /// concurrent creates can both pass it, and the loser then trips the
    /// `uq_employees_email` index, which the error layer also maps to 409.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> AppResult<Employee> {
        if EmployeeRepo::find_by_email(pool, &input.email)
            .await?
            .is_some()
        {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "An employee already exists with the given email: {}",
                input.email
            ))));
        }
        let employee = EmployeeRepo::create(pool, input).await?;
        tracing::info!(id = employee.id, "Employee created");
        Ok(employee)
    }

    /// List all employees. No ordering guarantee is part of the contract.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Employee>> {
        Ok(EmployeeRepo::list(pool).await?)
    }

    /// Look up an employee by id. `None` means not found; the caller
    /// decides how to surface the absence.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Option<Employee>> {
        Ok(EmployeeRepo::find_by_id(pool, id).await?)
    }

    /// Replace an employee's three mutable fields. Returns `None` (and
    /// performs no write) when the id does not exist.
    ///
    /// Email uniqueness is re-validated here too: an update that would
    /// introduce a duplicate email trips the unique index and surfaces
    /// as a 409, the same as on create.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &UpdateEmployee,
    ) -> AppResult<Option<Employee>> {
        Ok(EmployeeRepo::update(pool, id, changes).await?)
    }

    /// Delete an employee by id. Idempotent: a missing id is still success,
    /// so the repository's row-count result is deliberately discarded.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let _ = EmployeeRepo::delete(pool, id).await?;
        Ok(())
    }
}
