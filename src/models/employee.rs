use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub employee_id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Equality filter for employee searches. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub designation: Option<String>,
    pub department: Option<String>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        self.designation.as_ref().map_or(true, |d| *d == employee.designation)
            && self.department.as_ref().map_or(true, |d| *d == employee.department)
    }
}

/// Partial update applied by `updateEmployeeByEid`. Only `Some` fields are
/// written; for the nullable fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Option<String>>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<String>,
    pub department: Option<String>,
    pub employee_photo: Option<Option<String>>,
}

impl EmployeePatch {
    pub fn apply(self, employee: &mut Employee) {
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(gender) = self.gender {
            employee.gender = gender;
        }
        if let Some(designation) = self.designation {
            employee.designation = designation;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(date_of_joining) = self.date_of_joining {
            employee.date_of_joining = date_of_joining;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(employee_photo) = self.employee_photo {
            employee.employee_photo = employee_photo;
        }
        employee.updated_at = Utc::now();
    }
}
