use super::{EmployeeStore, UserStore};
use crate::errors::StoreError;
use crate::models::employee::{Employee, EmployeeFilter};
use crate::models::user::User;
use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

/// In-process store with the same uniqueness rules as the MongoDB indexes.
/// Records keep insertion order, like a collection scan.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    employees: RwLock<Vec<Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.username == username || u.email == email)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if let Some(existing) = users
            .iter()
            .find(|u| u.username == user.username || u.email == user.email)
        {
            let field = if existing.username == user.username { "username" } else { "email" };
            return Err(StoreError::DuplicateKey(format!("users.{}", field)));
        }
        users.push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn find_all(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, StoreError> {
        let employees = self.employees.read().await;
        Ok(employees.iter().filter(|e| filter.matches(e)).cloned().collect())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Employee>, StoreError> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.employee_id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.email == email).cloned())
    }

    async fn insert(&self, employee: &Employee) -> Result<(), StoreError> {
        let mut employees = self.employees.write().await;
        if employees.iter().any(|e| e.email == employee.email) {
            return Err(StoreError::DuplicateKey("employees.email".to_string()));
        }
        employees.push(employee.clone());
        Ok(())
    }

    async fn replace(&self, employee: &Employee) -> Result<bool, StoreError> {
        let mut employees = self.employees.write().await;
        if employees
            .iter()
            .any(|e| e.email == employee.email && e.employee_id != employee.employee_id)
        {
            return Err(StoreError::DuplicateKey("employees.email".to_string()));
        }
        match employees.iter_mut().find(|e| e.employee_id == employee.employee_id) {
            Some(slot) => {
                *slot = employee.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|e| e.employee_id != *id);
        Ok(employees.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn rejects_duplicate_usernames_and_emails() {
        let store = MemoryStore::new();
        UserStore::insert(&store, &User::new("ann".into(), "ann@x.com".into(), "hash".into()))
            .await
            .unwrap();

        let err = UserStore::insert(&store, &User::new("ann".into(), "other@x.com".into(), "hash".into()))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("users.username".to_string()));

        let err = UserStore::insert(&store, &User::new("bob".into(), "ann@x.com".into(), "hash".into()))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("users.email".to_string()));
    }

    #[actix_web::test]
    async fn replace_of_a_removed_employee_matches_nothing() {
        let store = MemoryStore::new();
        let now = chrono::Utc::now();
        let employee = Employee {
            employee_id: ObjectId::new(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            gender: None,
            designation: "Engineer".into(),
            salary: 90000.0,
            date_of_joining: "2023-01-01".into(),
            department: "R&D".into(),
            employee_photo: None,
            created_at: now,
            updated_at: now,
        };
        EmployeeStore::insert(&store, &employee).await.unwrap();
        assert!(store.replace(&employee).await.unwrap());

        assert!(store.delete(&employee.employee_id).await.unwrap());
        assert!(!store.replace(&employee).await.unwrap());
        assert!(store.find_all(&EmployeeFilter::default()).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn delete_reports_whether_anything_was_removed() {
        let store = MemoryStore::new();
        let id = ObjectId::new();
        assert!(!store.delete(&id).await.unwrap());
    }
}
