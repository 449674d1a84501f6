use super::types::{AuthPayload, Employee, EmployeeInput, Message};
use super::AppState;
use crate::handlers::{auth, employee};
use async_graphql::{Context, Object, Result, ID};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register an account; username and email must both be unused.
    async fn signup(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<Option<AuthPayload>> {
        let state = ctx.data::<AppState>()?;
        let req = auth::SignupRequest {
            username,
            email,
            password,
        };
        let outcome = auth::signup(state.users.as_ref(), &state.auth, req).await?;
        Ok(Some(outcome.into()))
    }

    async fn add_new_employee(&self, ctx: &Context<'_>, input: EmployeeInput) -> Result<Option<Employee>> {
        let state = ctx.data::<AppState>()?;
        let created = employee::add_new_employee(state.employees.as_ref(), input.into()).await?;
        Ok(Some(created.into()))
    }

    async fn update_employee_by_eid(
        &self,
        ctx: &Context<'_>,
        eid: ID,
        input: EmployeeInput,
    ) -> Result<Option<Employee>> {
        let state = ctx.data::<AppState>()?;
        let updated = employee::update_employee_by_eid(state.employees.as_ref(), &eid, input.into()).await?;
        Ok(Some(updated.into()))
    }

    async fn delete_employee_by_eid(&self, ctx: &Context<'_>, eid: ID) -> Result<Option<Message>> {
        let state = ctx.data::<AppState>()?;
        let message = employee::delete_employee_by_eid(state.employees.as_ref(), &eid).await?;
        Ok(Some(Message { message: Some(message) }))
    }
}
