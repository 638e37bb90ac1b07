//! Cat GraphQL types

use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result, SimpleObject, Union, ID};
use chrono::NaiveDate;

use super::message::MessageResponse;
use super::user::User;
use crate::error::ApiError;
use crate::graphql::context::auth_client;
use crate::models::cat::{Cat as DbCat, CatChanges, Coordinates, NewCat};
use crate::models::user::UserProfile;

/// A latitude / longitude pair
#[derive(Debug, Clone, Copy, PartialEq, SimpleObject)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for Location {
    fn from(c: Coordinates) -> Self {
        Self { lat: c.lat, lng: c.lng }
    }
}

/// Coordinates supplied by clients
#[derive(Debug, Clone, Copy, InputObject)]
pub struct LocationInput {
    pub lat: f64,
    pub lng: f64,
}

impl From<LocationInput> for Coordinates {
    fn from(input: LocationInput) -> Self {
        Self {
            lat: input.lat,
            lng: input.lng,
        }
    }
}

/// A cat exposed via GraphQL
pub struct Cat {
    inner: DbCat,
}

impl Cat {
    /// Create a new GraphQL Cat from a database Cat
    pub fn new(cat: DbCat) -> Self {
        Self { inner: cat }
    }
}

impl From<DbCat> for Cat {
    fn from(cat: DbCat) -> Self {
        Self::new(cat)
    }
}

#[Object]
impl Cat {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn cat_name(&self) -> &str {
        &self.inner.cat_name
    }

    async fn weight(&self) -> f64 {
        self.inner.weight
    }

    async fn filename(&self) -> &str {
        &self.inner.filename
    }

    async fn birthdate(&self) -> NaiveDate {
        self.inner.birthdate
    }

    async fn location(&self) -> Location {
        self.inner.location().into()
    }

    /// The owning user, fetched from the auth service when selected
    async fn owner(&self, ctx: &Context<'_>) -> Result<User> {
        let client = auth_client(ctx)?;
        let user = client
            .get_user(&self.inner.owner)
            .await
            .map_err(|e| ApiError::from(e).extend())?;
        Ok(UserProfile::from(user).into())
    }
}

/// Wrapper so a list of cats can be a union member
#[derive(SimpleObject)]
pub struct CatList {
    pub cats: Vec<Cat>,
}

/// A cat, or a message when the operation matched nothing
#[derive(Union)]
pub enum CatResult {
    Cat(Cat),
    Message(MessageResponse),
}

impl CatResult {
    /// Map a store result, using `miss` when the store returned nothing
    pub fn from_option(cat: Option<DbCat>, miss: impl Into<String>) -> Self {
        match cat {
            Some(cat) => Self::Cat(cat.into()),
            None => Self::Message(MessageResponse::new(miss)),
        }
    }
}

/// Cats, or a message when none matched
#[derive(Union)]
pub enum CatsResult {
    Cats(CatList),
    Message(MessageResponse),
}

impl CatsResult {
    /// Map a store result, using `empty` when nothing matched
    pub fn from_cats(cats: Vec<DbCat>, empty: impl Into<String>) -> Self {
        if cats.is_empty() {
            Self::Message(MessageResponse::new(empty))
        } else {
            Self::Cats(CatList {
                cats: cats.into_iter().map(Cat::from).collect(),
            })
        }
    }
}

/// Input for creating a cat
#[derive(Debug, InputObject)]
pub struct CatInput {
    pub cat_name: String,
    pub weight: f64,
    pub filename: String,
    pub birthdate: NaiveDate,
    pub location: LocationInput,
    /// Ignored: a new cat always belongs to the caller
    pub owner: Option<ID>,
}

impl CatInput {
    /// Convert into an insert owned by `owner`, discarding any client-supplied owner
    pub fn into_new_cat(self, owner: impl Into<String>) -> NewCat {
        NewCat {
            cat_name: self.cat_name,
            weight: self.weight,
            filename: self.filename,
            birthdate: self.birthdate,
            location: self.location.into(),
            owner: owner.into(),
        }
    }
}

/// Input for updating a cat; omitted fields are left unchanged
#[derive(Debug, Default, InputObject)]
pub struct CatModifyInput {
    pub cat_name: Option<String>,
    pub weight: Option<f64>,
    pub filename: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub location: Option<LocationInput>,
}

impl From<CatModifyInput> for CatChanges {
    fn from(input: CatModifyInput) -> Self {
        Self {
            cat_name: input.cat_name,
            weight: input.weight,
            filename: input.filename,
            birthdate: input.birthdate,
            location: input.location.map(Into::into),
        }
    }
}
