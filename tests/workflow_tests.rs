//! End-to-End Workflow Tests
//!
//! These tests drive the Store through the same sequences the menu loop
//! performs: create departments, roles, and employees, then list and update
//! them. The database file is provisioned the way an operator would
//! (applying `schema.sql` out of band) before the Store opens it.

use roster::{menu, RosterError, Store};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a throwaway database file with the reference schema applied.
///
/// Returns the tempdir (kept alive for the test's duration) and the path.
fn create_test_db() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("roster.db");

    {
        let conn = rusqlite::Connection::open(&path).expect("create database file");
        conn.execute_batch(include_str!("../schema.sql")).expect("apply schema");
    }

    (dir, path)
}

/// Seed one department and one role, returning (department_id, role_id).
fn seed_department_and_role(store: &Store) -> (i64, i64) {
    store.create_department("Engineering").expect("create department");
    let dept_id = store.departments().expect("list departments")[0].id;
    store.create_role("Engineer", 90000.0, dept_id).expect("create role");
    let role_id = store.role_refs().expect("list roles")[0].id;
    (dept_id, role_id)
}

// ============================================================================
// Create → List Round Trips
// ============================================================================

#[test]
fn test_department_appears_once_after_create() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");

    store.create_department("Finance").expect("create department");

    let departments = store.departments().expect("list departments");
    let matches: Vec<_> = departments.iter().filter(|d| d.name == "Finance").collect();
    assert_eq!(matches.len(), 1);
    assert!(matches[0].id > 0);
}

#[test]
fn test_department_ids_are_unique() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");

    for name in ["Engineering", "Sales", "Engineering"] {
        store.create_department(name).expect("create department");
    }

    let departments = store.departments().expect("list departments");
    assert_eq!(departments.len(), 3); // duplicate names allowed, ids distinct
    let mut ids: Vec<i64> = departments.iter().map(|d| d.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_role_listing_shows_department_name() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");
    seed_department_and_role(&store);

    let roles = store.roles().expect("list roles");
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].title, "Engineer");
    assert_eq!(roles[0].department.as_deref(), Some("Engineering"));
}

#[test]
fn test_employee_without_manager_lists_empty_manager() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");
    let (_dept_id, role_id) = seed_department_and_role(&store);

    store.create_employee("Ada", "Lovelace", role_id, None).expect("create employee");

    let employees = store.employees().expect("list employees");
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].manager, None);
}

#[test]
fn test_employee_manager_full_name_is_resolved() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");
    let (_dept_id, role_id) = seed_department_and_role(&store);

    store.create_employee("Ada", "Lovelace", role_id, None).expect("create manager");
    let manager_id = store.employee_refs().expect("list employees")[0].id;
    store
        .create_employee("Grace", "Hopper", role_id, Some(manager_id))
        .expect("create report");

    let employees = store.employees().expect("list employees");
    let grace = employees.iter().find(|e| e.first_name == "Grace").expect("Grace row");
    assert_eq!(grace.manager.as_deref(), Some("Ada Lovelace"));
}

// ============================================================================
// Update Semantics
// ============================================================================

#[test]
fn test_role_update_leaves_other_employees_unchanged() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");
    let (dept_id, role_id) = seed_department_and_role(&store);
    store.create_role("Manager", 120000.0, dept_id).expect("create role");
    let new_role_id = store.role_refs().expect("list roles")[1].id;

    store.create_employee("Ada", "Lovelace", role_id, None).expect("create employee");
    store.create_employee("Grace", "Hopper", role_id, None).expect("create employee");
    let targets = store.employee_refs().expect("list employees");

    let affected = store.update_employee_role(targets[0].id, new_role_id).expect("update");
    assert_eq!(affected, 1);

    let employees = store.employees().expect("list employees");
    assert_eq!(employees[0].title.as_deref(), Some("Manager"));
    assert_eq!(employees[1].title.as_deref(), Some("Engineer"));

    // Applying the same update again changes nothing further
    let affected = store.update_employee_role(targets[0].id, new_role_id).expect("update");
    assert_eq!(affected, 1);
    assert_eq!(store.employees().expect("list employees")[0].title.as_deref(), Some("Manager"));
}

#[test]
fn test_update_with_unknown_employee_id_is_a_noop() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");
    let (_dept_id, role_id) = seed_department_and_role(&store);

    let affected = store.update_employee_role(9999, role_id).expect("update");
    assert_eq!(affected, 0);
}

// ============================================================================
// Failure Semantics
// ============================================================================

#[test]
fn test_missing_database_file_is_a_connection_failure() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let err = Store::open(&dir.path().join("nowhere.db"))
        .err()
        .expect("opening a missing database file must fail");
    match err {
        RosterError::ConnectionFailed(msg) => assert!(msg.contains("nowhere.db")),
        other => panic!("expected ConnectionFailed, got {other}"),
    }
}

#[test]
fn test_role_with_nonexistent_department_fails_loudly() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");

    let result = store.create_role("Phantom", 1.0, 12345);
    assert!(matches!(result, Err(RosterError::ConstraintViolation(_))));

    // Nothing was written
    assert!(store.roles().expect("list roles").is_empty());
}

#[test]
fn test_employee_with_nonexistent_role_fails_loudly() {
    let (_dir, path) = create_test_db();
    let store = Store::open(&path).expect("open store");

    let result = store.create_employee("No", "Body", 12345, None);
    assert!(matches!(result, Err(RosterError::ConstraintViolation(_))));
}

// ============================================================================
// Prompt Policy
// ============================================================================

#[test]
fn test_salary_check_is_parseability_only() {
    // "abc" re-prompts; "50000" and "-1" are both accepted, documenting the
    // known absence of a positivity check.
    assert!(menu::validate_salary("abc").is_err());
    assert!(menu::validate_salary("50000").is_ok());
    assert!(menu::validate_salary("-1").is_ok());
}
