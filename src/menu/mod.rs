//! Interactive Controller
//!
//! A single-threaded read-eval-prompt loop: show the menu, dispatch the
//! chosen action to the store, print the result, repeat until Exit.
//!
//! Actions are a closed enum matched exhaustively, so adding a menu entry
//! without wiring a handler is a compile error. Each action re-queries the
//! store for its choice lists; nothing is cached between menu turns.
//!
//! The salary prompt is the only input with local validation (re-prompt on
//! non-numeric text). Every store error propagates to the caller.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fmt;

use crate::error::Result;
use crate::render;
use crate::store::{EmployeeRef, Store};

/// The fixed set of menu actions, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl Action {
    pub const ALL: [Self; 8] = [
        Self::ViewDepartments,
        Self::ViewRoles,
        Self::ViewEmployees,
        Self::AddDepartment,
        Self::AddRole,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
        Self::Exit,
    ];

    /// Menu label shown to the operator
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewDepartments => "View all departments",
            Self::ViewRoles => "View all roles",
            Self::ViewEmployees => "View all employees",
            Self::AddDepartment => "Add a department",
            Self::AddRole => "Add a role",
            Self::AddEmployee => "Add an employee",
            Self::UpdateEmployeeRole => "Update an employee role",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Run the menu loop until the operator chooses Exit.
pub fn run(store: &Store) -> Result<()> {
    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&Action::ALL)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::ViewDepartments => view_departments(store)?,
            Action::ViewRoles => view_roles(store)?,
            Action::ViewEmployees => view_employees(store)?,
            Action::AddDepartment => add_department(store, &theme)?,
            Action::AddRole => add_role(store, &theme)?,
            Action::AddEmployee => add_employee(store, &theme)?,
            Action::UpdateEmployeeRole => update_employee_role(store, &theme)?,
            Action::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn view_departments(store: &Store) -> Result<()> {
    let rows = store.departments()?;
    println!("{}", render::departments_table(&rows));
    Ok(())
}

fn view_roles(store: &Store) -> Result<()> {
    let rows = store.roles()?;
    println!("{}", render::roles_table(&rows));
    Ok(())
}

fn view_employees(store: &Store) -> Result<()> {
    let rows = store.employees()?;
    println!("{}", render::employees_table(&rows));
    Ok(())
}

fn add_department(store: &Store, theme: &ColorfulTheme) -> Result<()> {
    let name = prompt_text(theme, "What is the name of the department?")?;
    store.create_department(&name)?;
    println!("Added {name} to departments.");
    Ok(())
}

fn add_role(store: &Store, theme: &ColorfulTheme) -> Result<()> {
    let departments = store.departments()?;
    if departments.is_empty() {
        println!("No departments found. Add a department first.");
        return Ok(());
    }

    let title = prompt_text(theme, "What is the title of the role?")?;
    let salary = prompt_salary(theme)?;

    let labels: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
    let picked = Select::with_theme(theme)
        .with_prompt("Which department does this role belong to?")
        .items(&labels)
        .default(0)
        .interact()?;
    let department_id = departments[picked].id;

    store.create_role(&title, salary, department_id)?;
    println!("Added {title} to roles.");
    Ok(())
}

fn add_employee(store: &Store, theme: &ColorfulTheme) -> Result<()> {
    let roles = store.role_refs()?;
    if roles.is_empty() {
        println!("No roles found. Add a role first.");
        return Ok(());
    }
    let employees = store.employee_refs()?;

    let first_name = prompt_text(theme, "What is the employee's first name?")?;
    let last_name = prompt_text(theme, "What is the employee's last name?")?;

    let role_labels: Vec<&str> = roles.iter().map(|r| r.title.as_str()).collect();
    let picked = Select::with_theme(theme)
        .with_prompt("What is the employee's role?")
        .items(&role_labels)
        .default(0)
        .interact()?;
    let role_id = roles[picked].id;

    let manager_options = manager_labels(&employees);
    let picked = Select::with_theme(theme)
        .with_prompt("Who is the employee's manager?")
        .items(&manager_options)
        .default(0)
        .interact()?;
    let manager_id = manager_id_for(&employees, picked);

    store.create_employee(&first_name, &last_name, role_id, manager_id)?;
    println!("Added {first_name} {last_name} to employees.");
    Ok(())
}

fn update_employee_role(store: &Store, theme: &ColorfulTheme) -> Result<()> {
    let employees = store.employee_refs()?;
    if employees.is_empty() {
        println!("No employees found. Add an employee first.");
        return Ok(());
    }
    let roles = store.role_refs()?;
    if roles.is_empty() {
        println!("No roles found. Add a role first.");
        return Ok(());
    }

    let employee_labels: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    let picked = Select::with_theme(theme)
        .with_prompt("Which employee's role do you want to update?")
        .items(&employee_labels)
        .default(0)
        .interact()?;
    let employee_id = employees[picked].id;

    let role_labels: Vec<&str> = roles.iter().map(|r| r.title.as_str()).collect();
    let picked = Select::with_theme(theme)
        .with_prompt("Which role do you want to assign to the selected employee?")
        .items(&role_labels)
        .default(0)
        .interact()?;
    let role_id = roles[picked].id;

    let affected = store.update_employee_role(employee_id, role_id)?;
    if affected == 0 {
        println!("No matching employee; nothing updated.");
    } else {
        println!("Updated employee's role.");
    }
    Ok(())
}

/// Free-text prompt. Empty input is accepted as-is.
fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let text: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

/// Salary prompt. Re-prompts until the input parses as a number; negative
/// and zero values are accepted.
fn prompt_salary(theme: &ColorfulTheme) -> Result<f64> {
    let text: String = Input::with_theme(theme)
        .with_prompt("What is the salary for this role?")
        .validate_with(|input: &String| validate_salary(input))
        .interact_text()?;
    text.trim()
        .parse::<f64>()
        .map_err(|e| crate::error::RosterError::PromptFailed(format!("salary reparse: {e}")))
}

/// Numeric-parseability check for the salary prompt.
pub fn validate_salary(input: &str) -> std::result::Result<(), String> {
    match input.trim().parse::<f64>() {
        Ok(_) => Ok(()),
        Err(_) => Err("Please enter a valid number".to_string()),
    }
}

/// Manager choice list: an explicit "None" entry followed by every employee.
pub fn manager_labels(employees: &[EmployeeRef]) -> Vec<String> {
    let mut labels = Vec::with_capacity(employees.len() + 1);
    labels.push("None".to_string());
    labels.extend(employees.iter().map(|e| e.name.clone()));
    labels
}

/// Map a manager-list selection index back to an employee id.
pub fn manager_id_for(employees: &[EmployeeRef], selection: usize) -> Option<i64> {
    if selection == 0 {
        None
    } else {
        employees.get(selection - 1).map(|e| e.id)
    }
}
