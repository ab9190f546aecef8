//! Data Access Layer
//!
//! This module owns the single database connection and translates each
//! domain operation into exactly one parameterized statement.
//!
//! # Implementation Notes
//! - Uses `rusqlite` (synchronous driver; the whole tool is single-threaded)
//! - The connection is opened read-write WITHOUT create: a missing database
//!   file is a connection failure, since the schema is provisioned outside
//!   this tool (see `schema.sql`)
//! - `PRAGMA foreign_keys = ON` so referential constraints actually fire
//! - Listings use LEFT JOIN uniformly: a row with a dangling reference stays
//!   visible with empty joined columns
//! - Writes return the number of rows affected; an UPDATE that matches no
//!   row returns 0 and is not an error

use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::Path;

use crate::error::{Result, RosterError};

/// A department row
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// A role row joined with its department name
#[derive(Debug, Clone, PartialEq)]
pub struct RoleListing {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    /// None when the department reference dangles
    pub department: Option<String>,
}

/// An employee row joined with role, department, and manager name
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListing {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    /// Manager's full name; None for employees without a manager
    pub manager: Option<String>,
}

/// Minimal role row for building selection prompts
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRef {
    pub id: i64,
    pub title: String,
}

/// Minimal employee row (full name) for building selection prompts
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRef {
    pub id: i64,
    pub name: String,
}

/// Handle to the relational store, held open for the process lifetime
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database file.
    ///
    /// The file must already exist and contain the expected schema; this
    /// tool never creates or migrates it.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
            .map_err(|e| {
                RosterError::connection_failed(format!(
                    "Failed to open database {}: {e}",
                    path.display()
                ))
            })?;
        Self::from_connection(conn)
    }

    /// Open a throwaway in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            RosterError::connection_failed(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true).map_err(|e| {
            RosterError::connection_failed(format!("Failed to enable foreign keys: {e}"))
        })?;
        Ok(Self { conn })
    }

    /// All departments, ordered by id
    pub fn departments(&self) -> Result<Vec<Department>> {
        tracing::debug!(table = "department", "listing departments");
        self.select("SELECT id, name FROM department ORDER BY id", |row| {
            Ok(Department { id: row.get(0)?, name: row.get(1)? })
        })
    }

    /// All roles with their department name
    pub fn roles(&self) -> Result<Vec<RoleListing>> {
        tracing::debug!(table = "role", "listing roles");
        self.select(
            "SELECT role.id, role.title, role.salary, department.name AS department
             FROM role
             LEFT JOIN department ON role.department_id = department.id
             ORDER BY role.id",
            |row| {
                Ok(RoleListing {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    salary: row.get(2)?,
                    department: row.get(3)?,
                })
            },
        )
    }

    /// All employees with role, department, salary, and manager name
    pub fn employees(&self) -> Result<Vec<EmployeeListing>> {
        tracing::debug!(table = "employee", "listing employees");
        self.select(
            "SELECT e.id, e.first_name, e.last_name, role.title,
                    department.name AS department, role.salary,
                    m.first_name || ' ' || m.last_name AS manager
             FROM employee e
             LEFT JOIN role ON e.role_id = role.id
             LEFT JOIN department ON role.department_id = department.id
             LEFT JOIN employee m ON e.manager_id = m.id
             ORDER BY e.id",
            |row| {
                Ok(EmployeeListing {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    title: row.get(3)?,
                    department: row.get(4)?,
                    salary: row.get(5)?,
                    manager: row.get(6)?,
                })
            },
        )
    }

    /// Roles as id + title pairs for selection prompts
    pub fn role_refs(&self) -> Result<Vec<RoleRef>> {
        self.select("SELECT id, title FROM role ORDER BY id", |row| {
            Ok(RoleRef { id: row.get(0)?, title: row.get(1)? })
        })
    }

    /// Employees as id + full name pairs for selection prompts
    pub fn employee_refs(&self) -> Result<Vec<EmployeeRef>> {
        self.select(
            "SELECT id, first_name || ' ' || last_name FROM employee ORDER BY id",
            |row| Ok(EmployeeRef { id: row.get(0)?, name: row.get(1)? }),
        )
    }

    /// Insert a department; returns rows affected
    pub fn create_department(&self, name: &str) -> Result<usize> {
        tracing::debug!(table = "department", name, "inserting department");
        self.conn
            .execute("INSERT INTO department (name) VALUES (?1)", params![name])
            .map_err(RosterError::from_query)
    }

    /// Insert a role; returns rows affected
    pub fn create_role(&self, title: &str, salary: f64, department_id: i64) -> Result<usize> {
        tracing::debug!(table = "role", title, department_id, "inserting role");
        self.conn
            .execute(
                "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)",
                params![title, salary, department_id],
            )
            .map_err(RosterError::from_query)
    }

    /// Insert an employee; `manager_id = None` stores NULL
    pub fn create_employee(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: i64,
        manager_id: Option<i64>,
    ) -> Result<usize> {
        tracing::debug!(table = "employee", role_id, ?manager_id, "inserting employee");
        self.conn
            .execute(
                "INSERT INTO employee (first_name, last_name, role_id, manager_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![first_name, last_name, role_id, manager_id],
            )
            .map_err(RosterError::from_query)
    }

    /// Move one employee to a new role; returns rows affected (0 if the id
    /// matched nothing)
    pub fn update_employee_role(&self, employee_id: i64, role_id: i64) -> Result<usize> {
        tracing::debug!(table = "employee", employee_id, role_id, "updating employee role");
        self.conn
            .execute(
                "UPDATE employee SET role_id = ?1 WHERE id = ?2",
                params![role_id, employee_id],
            )
            .map_err(RosterError::from_query)
    }

    fn select<T>(
        &self,
        sql: &str,
        map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql).map_err(RosterError::from_query)?;
        let rows = stmt.query_map([], map).map_err(RosterError::from_query)?;
        rows.collect::<rusqlite::Result<Vec<T>>>().map_err(RosterError::from_query)
    }
}
