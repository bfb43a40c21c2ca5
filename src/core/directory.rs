//! Registered-employee roster and manager credential checks.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::store::{EMPLOYEES_KEY, KvStore, MANAGER_SECRET_KEY};

/// Roster seeded on first use.
const DEFAULT_EMPLOYEE_NAMES: [&str; 3] = ["Megan Cole", "Arjun Patel", "Lena Fischer"];
const DEFAULT_MANAGER_SECRET: &str = "1234"; // plaintext placeholder, not a security boundary

pub struct Directory<'a> {
    store: &'a KvStore,
}

impl<'a> Directory<'a> {
    pub fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Seed default data when the keys are absent. Runs before every
    /// command that touches the roster or credential.
    pub fn ensure_seeded(&self) -> AppResult<()> {
        if self.store.read(EMPLOYEES_KEY).is_none() {
            let defaults: Vec<Employee> =
                DEFAULT_EMPLOYEE_NAMES.iter().map(|n| Employee::new(n)).collect();
            self.save_employees(&defaults)?;
        }
        if self.store.read(MANAGER_SECRET_KEY).is_none() {
            let raw = serde_json::to_string(DEFAULT_MANAGER_SECRET)?;
            self.store.write(MANAGER_SECRET_KEY, &raw)?;
        }
        Ok(())
    }

    /// All registered employees in insertion order.
    /// Corrupt stored JSON degrades to an empty roster.
    pub fn list_employees(&self) -> Vec<Employee> {
        let Some(raw) = self.store.read(EMPLOYEES_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(employees) => employees,
            Err(e) => {
                log::error!("error retrieving registered employees: {e}");
                Vec::new()
            }
        }
    }

    /// Register a new employee.
    ///
    /// The name is trimmed first; a blank result is a validation failure and
    /// a case-insensitive match against the roster is a duplicate failure.
    /// Neither mutates the stored roster.
    pub fn register_employee(&self, name: &str) -> AppResult<Employee> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "The employee name cannot be empty.".to_string(),
            ));
        }

        let mut employees = self.list_employees();
        if employees
            .iter()
            .any(|e| e.name.to_lowercase() == trimmed.to_lowercase())
        {
            return Err(AppError::Duplicate(format!(
                "An employee named \"{trimmed}\" is already registered."
            )));
        }

        let new_employee = Employee::new(trimmed);
        employees.push(new_employee.clone());
        self.save_employees(&employees)?;
        Ok(new_employee)
    }

    /// Case-sensitive exact lookup. Registration checks uniqueness
    /// case-insensitively; login lookup does not. Kept asymmetric on purpose.
    pub fn find_employee(&self, name: &str) -> Option<Employee> {
        self.list_employees().into_iter().find(|e| e.name == name)
    }

    /// Exact-match comparison against the stored shared secret.
    pub fn validate_manager(&self, secret: &str) -> bool {
        let Some(raw) = self.store.read(MANAGER_SECRET_KEY) else {
            return false;
        };
        match serde_json::from_str::<String>(&raw) {
            Ok(stored) => stored == secret,
            Err(e) => {
                log::error!("error retrieving manager credential: {e}");
                false
            }
        }
    }

    fn save_employees(&self, employees: &[Employee]) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(employees)?;
        self.store.write(EMPLOYEES_KEY, &raw)
    }
}
