//! GraphQL type definitions for the cats API
//!
//! Object, input and result types exposed through the schema. Operations that
//! can soft-fail return unions whose `MessageResponse` member carries the
//! explanation.

mod cat;
mod message;
mod user;

pub use cat::{Cat, CatInput, CatList, CatModifyInput, CatResult, CatsResult, Location, LocationInput};
pub use message::MessageResponse;
pub use user::{
    Credentials, LoginResponse, TokenMessage, User, UserInput, UserModifyInput, UserResponse,
    UserRole,
};
