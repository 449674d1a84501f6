use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFilter, EmployeePatch};
use crate::store::EmployeeStore;
use crate::utils::validation::validate_payload;
use bson::oid::ObjectId;
use chrono::Utc;
use validator::Validate;

const NOT_FOUND: &str = "Employee not found";
const EMAIL_TAKEN: &str = "Employee with this email already exists";
const MISSING_FIELDS: &str = "All required fields must be provided";

#[derive(Debug, Clone, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub gender: Option<String>,
    #[validate(length(min = 1))]
    pub designation: String,
    pub salary: f64,
    #[validate(length(min = 1))]
    pub date_of_joining: String,
    #[validate(length(min = 1))]
    pub department: String,
    pub employee_photo: Option<String>,
}

impl NewEmployee {
    // Zero and NaN count as missing.
    fn salary_provided(&self) -> bool {
        self.salary != 0.0 && !self.salary.is_nan()
    }

    fn into_employee(self) -> Employee {
        let now = Utc::now();
        Employee {
            employee_id: ObjectId::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            gender: self.gender,
            designation: self.designation,
            salary: self.salary,
            date_of_joining: self.date_of_joining,
            department: self.department,
            employee_photo: self.employee_photo,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Ids that cannot be ObjectIds cannot match any document.
fn parse_eid(eid: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(eid).map_err(|_| AppError::NotFound(NOT_FOUND.to_string()))
}

fn email_conflict(err: AppError) -> AppError {
    match err {
        AppError::Conflict(_) => AppError::Conflict(EMAIL_TAKEN.to_string()),
        other => other,
    }
}

async fn fetch_existing(employees: &dyn EmployeeStore, eid: &str) -> Result<Employee, AppError> {
    let id = parse_eid(eid)?;
    employees
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

pub async fn get_all_employees(employees: &dyn EmployeeStore) -> Result<Vec<Employee>, AppError> {
    employees.find_all(&EmployeeFilter::default()).await.map_err(|err| {
        log::error!("getAllEmployees Error: {}", err);
        AppError::Unexpected("Failed to get employees".to_string())
    })
}

pub async fn search_employee_by_eid(employees: &dyn EmployeeStore, eid: &str) -> Result<Employee, AppError> {
    fetch_existing(employees, eid).await.map_err(|err| {
        log::error!("searchEmployeeByEid Error: {}", err);
        match err {
            AppError::NotFound(_) => err,
            _ => AppError::Unexpected("Failed to fetch employee".to_string()),
        }
    })
}

pub async fn search_employee_by_designation_or_department(
    employees: &dyn EmployeeStore,
    designation: Option<String>,
    department: Option<String>,
) -> Result<Vec<Employee>, AppError> {
    let filter = EmployeeFilter {
        designation: designation.filter(|d| !d.is_empty()),
        department: department.filter(|d| !d.is_empty()),
    };

    employees.find_all(&filter).await.map_err(|err| {
        log::error!("searchEmployeeByDesignationOrDepartment Error: {}", err);
        AppError::Unexpected("Failed to fetch employee list".to_string())
    })
}

pub async fn add_new_employee(employees: &dyn EmployeeStore, input: NewEmployee) -> Result<Employee, AppError> {
    create_employee(employees, input).await.map_err(|err| {
        log::error!("addNewEmployee Error: {}", err);
        err
    })
}

async fn create_employee(employees: &dyn EmployeeStore, input: NewEmployee) -> Result<Employee, AppError> {
    validate_payload(&input, MISSING_FIELDS)?;
    if !input.salary_provided() {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }

    if employees.find_by_email(&input.email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let employee = input.into_employee();
    employees
        .insert(&employee)
        .await
        .map_err(|err| email_conflict(err.into()))?;
    Ok(employee)
}

pub async fn update_employee_by_eid(
    employees: &dyn EmployeeStore,
    eid: &str,
    patch: EmployeePatch,
) -> Result<Employee, AppError> {
    apply_update(employees, eid, patch).await.map_err(|err| {
        log::error!("updateEmployeeByEid Error: {}", err);
        err
    })
}

async fn apply_update(employees: &dyn EmployeeStore, eid: &str, patch: EmployeePatch) -> Result<Employee, AppError> {
    let mut employee = fetch_existing(employees, eid).await?;
    patch.apply(&mut employee);

    let matched = employees
        .replace(&employee)
        .await
        .map_err(|err| email_conflict(err.into()))?;
    if !matched {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok(employee)
}

pub async fn delete_employee_by_eid(employees: &dyn EmployeeStore, eid: &str) -> Result<String, AppError> {
    remove_employee(employees, eid).await.map_err(|err| {
        log::error!("deleteEmployeeByEid Error: {}", err);
        err
    })
}

async fn remove_employee(employees: &dyn EmployeeStore, eid: &str) -> Result<String, AppError> {
    let employee = fetch_existing(employees, eid).await?;
    employees.delete(&employee.employee_id).await?;
    Ok("Employee deleted successfully".to_string())
}
