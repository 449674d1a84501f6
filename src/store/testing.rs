//! Store doubles for exercising resolver failure paths.

use super::{EmployeeStore, MemoryStore, UserStore};
use crate::errors::StoreError;
use crate::models::employee::{Employee, EmployeeFilter};
use crate::models::user::User;
use async_trait::async_trait;
use bson::oid::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Every call fails as if the server were unreachable.
    Backend,
    /// Reads find nothing, writes hit a unique index.
    DuplicateOnWrite,
}

pub struct FailingStore {
    failure: Failure,
}

impl FailingStore {
    pub fn new(failure: Failure) -> Self {
        FailingStore { failure }
    }

    fn read<T: Default>(&self) -> Result<T, StoreError> {
        match self.failure {
            Failure::Backend => Err(StoreError::Backend("connection refused".to_string())),
            Failure::DuplicateOnWrite => Ok(T::default()),
        }
    }

    fn write(&self) -> Result<(), StoreError> {
        match self.failure {
            Failure::Backend => Err(StoreError::Backend("connection refused".to_string())),
            Failure::DuplicateOnWrite => Err(StoreError::DuplicateKey("E11000 duplicate key error".to_string())),
        }
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        self.read()
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        self.read()
    }

    async fn find_by_username_or_email(&self, _username: &str, _email: &str) -> Result<Option<User>, StoreError> {
        self.read()
    }

    async fn insert(&self, _user: &User) -> Result<(), StoreError> {
        self.write()
    }
}

#[async_trait]
impl EmployeeStore for FailingStore {
    async fn find_all(&self, _filter: &EmployeeFilter) -> Result<Vec<Employee>, StoreError> {
        self.read()
    }

    async fn find_by_id(&self, _id: &ObjectId) -> Result<Option<Employee>, StoreError> {
        self.read()
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<Employee>, StoreError> {
        self.read()
    }

    async fn insert(&self, _employee: &Employee) -> Result<(), StoreError> {
        self.write()
    }

    async fn replace(&self, _employee: &Employee) -> Result<bool, StoreError> {
        self.write().map(|_| true)
    }

    async fn delete(&self, _id: &ObjectId) -> Result<bool, StoreError> {
        self.write().map(|_| true)
    }
}

/// Removes each employee right after it is looked up by id, as a concurrent
/// delete would.
#[derive(Default)]
pub struct VanishingStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl EmployeeStore for VanishingStore {
    async fn find_all(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, StoreError> {
        self.inner.find_all(filter).await
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Employee>, StoreError> {
        let found = self.inner.find_by_id(id).await?;
        self.inner.delete(id).await?;
        Ok(found)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        EmployeeStore::find_by_email(&self.inner, email).await
    }

    async fn insert(&self, employee: &Employee) -> Result<(), StoreError> {
        EmployeeStore::insert(&self.inner, employee).await
    }

    async fn replace(&self, employee: &Employee) -> Result<bool, StoreError> {
        self.inner.replace(employee).await
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
