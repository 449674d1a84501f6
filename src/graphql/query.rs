use super::types::{employee_list, AuthPayload, Employee};
use super::AppState;
use crate::handlers::{auth, employee};
use async_graphql::{Context, Object, Result, ID};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Authenticate with a username or an email plus password.
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: Option<String>,
        email: Option<String>,
        password: String,
    ) -> Result<Option<AuthPayload>> {
        let state = ctx.data::<AppState>()?;
        let req = auth::LoginRequest {
            username,
            email,
            password,
        };
        let outcome = auth::login(state.users.as_ref(), &state.auth, req).await?;
        Ok(Some(outcome.into()))
    }

    async fn get_all_employees(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Employee>>>> {
        let state = ctx.data::<AppState>()?;
        let employees = employee::get_all_employees(state.employees.as_ref()).await?;
        Ok(Some(employee_list(employees)))
    }

    async fn search_employee_by_eid(&self, ctx: &Context<'_>, eid: ID) -> Result<Option<Employee>> {
        let state = ctx.data::<AppState>()?;
        let found = employee::search_employee_by_eid(state.employees.as_ref(), &eid).await?;
        Ok(Some(found.into()))
    }

    async fn search_employee_by_designation_or_department(
        &self,
        ctx: &Context<'_>,
        designation: Option<String>,
        department: Option<String>,
    ) -> Result<Option<Vec<Option<Employee>>>> {
        let state = ctx.data::<AppState>()?;
        let employees =
            employee::search_employee_by_designation_or_department(state.employees.as_ref(), designation, department)
                .await?;
        Ok(Some(employee_list(employees)))
    }
}
