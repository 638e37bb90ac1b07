//! Cat models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cat row as stored in the `cats` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Cat {
    pub id: Uuid,
    pub cat_name: String,
    pub weight: f64,
    pub filename: String,
    pub birthdate: NaiveDate,
    pub lat: f64,
    pub lng: f64,
    /// Id of the owning user (as issued by the auth service)
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

impl Cat {
    /// Cat location as a coordinate pair
    pub fn location(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A latitude / longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Axis-aligned bounding box, inclusive on every edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Build the box spanned by two opposite corners
    ///
    /// Corners are normalised, so a swapped pair spans the same box.
    pub fn from_corners(top_right: Coordinates, bottom_left: Coordinates) -> Self {
        Self {
            min_lat: top_right.lat.min(bottom_left.lat),
            max_lat: top_right.lat.max(bottom_left.lat),
            min_lng: top_right.lng.min(bottom_left.lng),
            max_lng: top_right.lng.max(bottom_left.lng),
        }
    }

    /// Check whether a point lies within the box
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}

/// Data for inserting a new cat; the owner is always the caller
#[derive(Debug, Clone)]
pub struct NewCat {
    pub cat_name: String,
    pub weight: f64,
    pub filename: String,
    pub birthdate: NaiveDate,
    pub location: Coordinates,
    pub owner: String,
}

/// Partial update; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct CatChanges {
    pub cat_name: Option<String>,
    pub weight: Option<f64>,
    pub filename: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub location: Option<Coordinates>,
}

impl CatChanges {
    /// Apply the changes to a cat in place
    pub fn apply_to(&self, cat: &mut Cat) {
        if let Some(name) = &self.cat_name {
            cat.cat_name = name.clone();
        }
        if let Some(weight) = self.weight {
            cat.weight = weight;
        }
        if let Some(filename) = &self.filename {
            cat.filename = filename.clone();
        }
        if let Some(birthdate) = self.birthdate {
            cat.birthdate = birthdate;
        }
        if let Some(location) = self.location {
            cat.lat = location.lat;
            cat.lng = location.lng;
        }
    }
}
