use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub user_id: ObjectId,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A fresh account; `password` must already be hashed.
    pub fn new(username: String, email: String, password: String) -> Self {
        let now = Utc::now();
        User {
            user_id: ObjectId::new(),
            username,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }
}
