use crate::handlers::auth::AuthOutcome;
use crate::handlers::employee::NewEmployee;
use crate::models::employee::{Employee as EmployeeDoc, EmployeePatch};
use crate::models::user::User as UserDoc;
use async_graphql::{InputObject, MaybeUndefined, SimpleObject, ID};

// Every output field is nullable, matching the published schema.

#[derive(SimpleObject, Clone)]
#[graphql(rename_fields = "snake_case")]
pub struct User {
    #[graphql(name = "_id")]
    pub id: Option<ID>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<UserDoc> for User {
    fn from(user: UserDoc) -> Self {
        User {
            id: Some(ID(user.user_id.to_hex())),
            username: Some(user.username),
            email: Some(user.email),
            password: Some(user.password),
            created_at: Some(user.created_at.to_rfc3339()),
            updated_at: Some(user.updated_at.to_rfc3339()),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(rename_fields = "snake_case")]
pub struct Employee {
    #[graphql(name = "_id")]
    pub id: Option<ID>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<String>,
    pub department: Option<String>,
    pub employee_photo: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<EmployeeDoc> for Employee {
    fn from(employee: EmployeeDoc) -> Self {
        Employee {
            id: Some(ID(employee.employee_id.to_hex())),
            first_name: Some(employee.first_name),
            last_name: Some(employee.last_name),
            email: Some(employee.email),
            gender: employee.gender,
            designation: Some(employee.designation),
            salary: Some(employee.salary),
            date_of_joining: Some(employee.date_of_joining),
            department: Some(employee.department),
            employee_photo: employee.employee_photo,
            created_at: Some(employee.created_at.to_rfc3339()),
            updated_at: Some(employee.updated_at.to_rfc3339()),
        }
    }
}

/// Wraps each record for the declared `[Employee]` list shape.
pub fn employee_list(employees: Vec<EmployeeDoc>) -> Vec<Option<Employee>> {
    employees.into_iter().map(|e| Some(e.into())).collect()
}

#[derive(SimpleObject, Clone)]
pub struct AuthPayload {
    pub token: Option<String>,
    pub user: Option<User>,
    pub message: Option<String>,
}

impl From<AuthOutcome> for AuthPayload {
    fn from(outcome: AuthOutcome) -> Self {
        AuthPayload {
            token: outcome.token,
            user: outcome.user.map(User::from),
            message: Some(outcome.message),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Message {
    pub message: Option<String>,
}

/// Shared by `addNewEmployee` and `updateEmployeeByEid`. The optional fields
/// distinguish an omitted key from an explicit `null`.
#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: MaybeUndefined<String>,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: String,
    pub department: String,
    pub employee_photo: MaybeUndefined<String>,
}

fn supplied(value: MaybeUndefined<String>) -> Option<Option<String>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

impl From<EmployeeInput> for NewEmployee {
    fn from(input: EmployeeInput) -> Self {
        NewEmployee {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            gender: supplied(input.gender).flatten(),
            designation: input.designation,
            salary: input.salary,
            date_of_joining: input.date_of_joining,
            department: input.department,
            employee_photo: supplied(input.employee_photo).flatten(),
        }
    }
}

impl From<EmployeeInput> for EmployeePatch {
    fn from(input: EmployeeInput) -> Self {
        EmployeePatch {
            first_name: Some(input.first_name),
            last_name: Some(input.last_name),
            email: Some(input.email),
            gender: supplied(input.gender),
            designation: Some(input.designation),
            salary: Some(input.salary),
            date_of_joining: Some(input.date_of_joining),
            department: Some(input.department),
            employee_photo: supplied(input.employee_photo),
        }
    }
}
