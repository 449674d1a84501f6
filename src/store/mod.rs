//! Persistence seam between the resolvers and the document store.

pub mod memory;
pub mod mongo;
#[cfg(test)]
pub mod testing;

use crate::errors::StoreError;
use crate::models::employee::{Employee, EmployeeFilter};
use crate::models::user::User;
use async_trait::async_trait;
use bson::oid::ObjectId;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// First user whose username OR email matches.
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, StoreError>;
    async fn insert(&self, user: &User) -> Result<(), StoreError>;
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, StoreError>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Employee>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError>;
    async fn insert(&self, employee: &Employee) -> Result<(), StoreError>;
    /// Overwrites the stored document with the same id. Returns whether one
    /// matched.
    async fn replace(&self, employee: &Employee) -> Result<bool, StoreError>;
    /// Returns whether a document was removed.
    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError>;
}
