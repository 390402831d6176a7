//! Roster Repository

use rust_decimal::Decimal;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use super::{RepoError, RepoResult};
use crate::store::{BackOfficeStore, Bucket};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

#[derive(Clone)]
pub struct RosterRepository {
    store: BackOfficeStore,
}

impl RosterRepository {
    pub fn new(store: BackOfficeStore) -> Self {
        Self { store }
    }

    /// All employees, ordered by name
    pub fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.store.list(Bucket::Roster)?;
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    /// Find employee by id
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        Ok(self.store.get(Bucket::Roster, id)?)
    }

    /// Create a new employee; the id is a slug derived from the name
    pub fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_rate(data.hourly_rate)?;

        let id = slugify(&data.name);
        if self.find_by_id(&id)?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee '{}' already exists",
                id
            )));
        }

        let employee = Employee {
            id: id.clone(),
            name: data.name.trim().to_string(),
            role: data.role,
            zone: data.zone,
            hourly_rate: data.hourly_rate,
        };
        self.store.put(Bucket::Roster, &id, &employee)?;
        tracing::info!("Employee '{}' added to roster", id);
        Ok(employee)
    }

    /// Update an employee in place
    pub fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let mut employee = self
            .find_by_id(id)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            employee.name = name.trim().to_string();
        }
        if let Some(role) = data.role {
            employee.role = role;
        }
        if let Some(zone) = data.zone {
            employee.zone = zone;
        }
        if let Some(rate) = data.hourly_rate {
            validate_rate(rate)?;
            employee.hourly_rate = rate;
        }

        self.store.put(Bucket::Roster, id, &employee)?;
        Ok(employee)
    }

    /// Remove an employee from the roster.
    ///
    /// Does not cascade: schedule and attendance rows keyed by this id stay
    /// behind and are skipped wherever the roster is joined.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        if !self.store.remove(Bucket::Roster, id)? {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        }
        tracing::info!("Employee '{}' removed from roster", id);
        Ok(())
    }
}

fn validate_rate(rate: Decimal) -> RepoResult<()> {
    if rate <= Decimal::ZERO {
        return Err(RepoError::Validation(
            "hourly rate must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Lowercase slug from a display name ("José Préz" -> "jos-pr-z")
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
