//! In-memory implementations of the store traits
//!
//! Every store call is counted so tests can assert that a rejected caller
//! never reached storage.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use cats_api::authorization::CatFilter;
use cats_api::models::cat::{BoundingBox, Cat, CatChanges, NewCat};
use cats_api::models::user::{User, UserChanges, UserProfile};
use cats_api::repositories::{CatStore, UserStore};

/// Cat store holding rows in a vector
#[derive(Default)]
pub struct InMemoryCatStore {
    cats: Mutex<Vec<Cat>>,
    calls: AtomicUsize,
    drop_inserts: AtomicBool,
    fail: AtomicBool,
}

impl InMemoryCatStore {
    pub fn with_cats(cats: Vec<Cat>) -> Self {
        Self {
            cats: Mutex::new(cats),
            ..Self::default()
        }
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make `create` report that no record was produced
    pub fn drop_inserts(&self) {
        self.drop_inserts.store(true, Ordering::SeqCst);
    }

    /// Make every call fail as if the database were down
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn get(&self, id: Uuid) -> Option<Cat> {
        self.cats.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.cats.lock().unwrap().len()
    }

    fn enter(&self) -> Result<(), sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }

    fn select(&self, predicate: impl Fn(&Cat) -> bool) -> Vec<Cat> {
        self.cats
            .lock()
            .unwrap()
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CatStore for InMemoryCatStore {
    async fn find_all(&self) -> Result<Vec<Cat>, sqlx::Error> {
        self.enter()?;
        Ok(self.select(|_| true))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cat>, sqlx::Error> {
        self.enter()?;
        Ok(self.get(id))
    }

    async fn find_in_area(&self, area: BoundingBox) -> Result<Vec<Cat>, sqlx::Error> {
        self.enter()?;
        Ok(self.select(|c| area.contains(c.location())))
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Cat>, sqlx::Error> {
        self.enter()?;
        Ok(self.select(|c| c.owner == owner))
    }

    async fn create(&self, cat: NewCat) -> Result<Option<Cat>, sqlx::Error> {
        self.enter()?;
        if self.drop_inserts.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let cat = Cat {
            id: Uuid::new_v4(),
            cat_name: cat.cat_name,
            weight: cat.weight,
            filename: cat.filename,
            birthdate: cat.birthdate,
            lat: cat.location.lat,
            lng: cat.location.lng,
            owner: cat.owner,
            created_at: Utc::now(),
        };
        self.cats.lock().unwrap().push(cat.clone());
        Ok(Some(cat))
    }

    async fn update(
        &self,
        filter: &CatFilter<'_>,
        changes: &CatChanges,
    ) -> Result<Option<Cat>, sqlx::Error> {
        self.enter()?;
        let mut cats = self.cats.lock().unwrap();
        Ok(cats.iter_mut().find(|c| filter.matches(c)).map(|cat| {
            changes.apply_to(cat);
            cat.clone()
        }))
    }

    async fn delete(&self, filter: &CatFilter<'_>) -> Result<Option<Cat>, sqlx::Error> {
        self.enter()?;
        let mut cats = self.cats.lock().unwrap();
        let position = cats.iter().position(|c| filter.matches(c));
        Ok(position.map(|i| cats.remove(i)))
    }
}

/// User mirror store holding rows in a vector
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    calls: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn upsert(&self, profile: &UserProfile) -> Result<User, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let row = User {
            id: profile.id.clone(),
            user_name: profile.user_name.clone(),
            email: profile.email.to_lowercase(),
            role: profile.role,
            created_at: now,
            updated_at: now,
        };
        match users.iter_mut().find(|u| u.id == profile.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = User { created_at, ..row };
                Ok(existing.clone())
            }
            None => {
                users.push(row.clone());
                Ok(row)
            }
        }
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<Option<User>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            if let Some(name) = &changes.user_name {
                user.user_name = name.clone();
            }
            if let Some(email) = &changes.email {
                user.email = email.to_lowercase();
            }
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let position = users.iter().position(|u| u.id == id);
        Ok(position.map(|i| users.remove(i)))
    }
}
