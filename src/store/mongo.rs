use super::{EmployeeStore, UserStore};
use crate::config::DatabaseConfig;
use crate::errors::{AppError, StoreError};
use crate::models::employee::{Employee, EmployeeFilter};
use crate::models::user::User;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

const USERS: &str = "users";
const EMPLOYEES: &str = "employees";

/// MongoDB-backed store. Cloning shares the driver's connection pool.
#[derive(Clone)]
pub struct MongoStore {
    users: Collection<User>,
    employees: Collection<Employee>,
}

impl MongoStore {
    /// Connects, pings the server and makes sure the unique indexes exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let uri = config
            .connection_uri()
            .map_err(|e| AppError::Unexpected(e.to_string()))?;

        let client = Client::with_uri_str(&uri).await.map_err(StoreError::from)?;
        let db = client.database(&config.db_name);
        db.run_command(doc! { "ping": 1 }).await.map_err(StoreError::from)?;
        log::info!("MongoDB connected successfully to database '{}'", config.db_name);

        let store = Self::from_database(&db);
        store.ensure_indexes().await?;
        Ok(store)
    }

    pub fn from_database(db: &Database) -> Self {
        MongoStore {
            users: db.collection(USERS),
            employees: db.collection(EMPLOYEES),
        }
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique = |field: &str| {
            IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build()
        };

        self.users
            .create_indexes([unique("username"), unique("email")])
            .await?;
        self.employees.create_index(unique("email")).await?;
        log::info!("Unique indexes ensured on '{}' and '{}'", USERS, EMPLOYEES);
        Ok(())
    }
}

fn filter_document(filter: &EmployeeFilter) -> Document {
    let mut query = Document::new();
    if let Some(designation) = &filter.designation {
        query.insert("designation", designation.as_str());
    }
    if let Some(department) = &filter.department {
        query.insert("department", department.as_str());
    }
    query
}

#[async_trait]
impl UserStore for MongoStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "username": username }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, StoreError> {
        let query = doc! { "$or": [ { "username": username }, { "email": email } ] };
        Ok(self.users.find_one(query).await?)
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.users.insert_one(user).await?;
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MongoStore {
    async fn find_all(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, StoreError> {
        let cursor = self.employees.find(filter_document(filter)).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Employee>, StoreError> {
        Ok(self.employees.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        Ok(self.employees.find_one(doc! { "email": email }).await?)
    }

    async fn insert(&self, employee: &Employee) -> Result<(), StoreError> {
        self.employees.insert_one(employee).await?;
        Ok(())
    }

    async fn replace(&self, employee: &Employee) -> Result<bool, StoreError> {
        let result = self
            .employees
            .replace_one(doc! { "_id": employee.employee_id }, employee)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let result = self.employees.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }
}
