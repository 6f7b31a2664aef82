use serde::{Deserialize, Serialize};

/// A staff member as stored in the `employees` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub role: String,
    pub phone: Option<String>,
    pub hourly_rate: Option<i64>,
    pub is_active: bool,
}

/// Input for creating an employee. The id is always assigned by storage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewEmployee {
    pub full_name: String,
    pub role: String,
    pub phone: Option<String>,
    pub hourly_rate: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewEmployee {
    pub fn new(full_name: &str, role: &str) -> Self {
        NewEmployee {
            full_name: full_name.to_string(),
            role: role.to_string(),
            phone: None,
            hourly_rate: None,
            is_active: true,
        }
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn hourly_rate(mut self, rate: i64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    All,
    ActiveOnly,
}

impl EmployeeFilter {
    pub fn from_only_active(only_active: bool) -> Self {
        if only_active {
            EmployeeFilter::ActiveOnly
        } else {
            EmployeeFilter::All
        }
    }
}
