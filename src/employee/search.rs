use super::model::Employee;

/// Client-side filter applied to the employee table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Matches ids containing this text.
    pub employee_id: String,
    /// Case-insensitive substring of the name.
    pub name: String,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.employee_id.trim().is_empty() && self.name.trim().is_empty()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        let id = self.employee_id.trim();
        if !id.is_empty() && !employee.id.contains(id) {
            return false;
        }
        let name = self.name.trim();
        if !name.is_empty()
            && !employee
                .first_name
                .to_lowercase()
                .contains(&name.to_lowercase())
        {
            return false;
        }
        true
    }

    /// Matching employees in their original order.
    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}
