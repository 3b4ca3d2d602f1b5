//! User resource model and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A managed user account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    /// Version counter for optimistic concurrency (If-Match).
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, age: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            age,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update request, bumping version and updated_at.
    pub fn apply_update(&mut self, update: &UpdateUserRequest) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl CreateUserRequest {
    /// Field-level validation; returns the first failing message.
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_age(self.age)
    }
}

/// Payload for updating a user. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), String> {
    if !email.contains('@') || email.trim().is_empty() {
        return Err(format!("'{email}' is not a valid email address"));
    }
    Ok(())
}

fn validate_age(age: i32) -> Result<(), String> {
    if age <= 0 {
        return Err("age must be positive".to_string());
    }
    Ok(())
}
