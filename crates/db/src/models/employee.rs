//! Employee entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffdir_core::types::{DbId, Timestamp};

/// An employee row from the `employees` table.
///
/// Serialized as camelCase on the wire
/// (`{"id", "firstName", "lastName", "email", ...}`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new employee. The id is assigned by the database.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// DTO for updating an existing employee.
///
/// Exactly the three mutable fields, all required: an update fully
/// replaces them. The id is not reachable through this path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
