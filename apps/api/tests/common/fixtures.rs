//! Test fixtures for API integration tests
//!
//! Provides reusable cats, mirror users and caller identities.

#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use cats_api::models::cat::Cat;
use cats_api::models::user::{AuthenticatedUser, User, UserData, UserRole};

/// A cat owned by `owner` at the given coordinates
pub fn cat(name: &str, owner: &str, lat: f64, lng: f64) -> Cat {
    Cat {
        id: Uuid::new_v4(),
        cat_name: name.to_string(),
        weight: 4.5,
        filename: format!("{}.jpg", name.to_lowercase()),
        birthdate: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        lat,
        lng,
        owner: owner.to_string(),
        created_at: Utc::now(),
    }
}

/// A row of the local user mirror
pub fn mirror_user(id: &str, user_name: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: id.to_string(),
        user_name: user_name.to_string(),
        email: format!("{}@example.com", user_name.to_lowercase()),
        role,
        created_at: now,
        updated_at: now,
    }
}

/// Ambient context for a caller with the given role
pub fn identity(id: &str, role: UserRole) -> UserData {
    UserData {
        user: AuthenticatedUser {
            id: id.to_string(),
            user_name: format!("user-{}", id),
            email: format!("{}@example.com", id),
            role,
        },
        token: format!("token-for-{}", id),
    }
}

pub fn user_identity(id: &str) -> UserData {
    identity(id, UserRole::User)
}

pub fn admin_identity(id: &str) -> UserData {
    identity(id, UserRole::Admin)
}
