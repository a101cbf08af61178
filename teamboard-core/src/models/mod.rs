//! Domain models for teamboard.
//!
//! # Entities
//!
//! - [`Team`]: A named group of members working on a set of projects.
//! - [`Member`]: A person with a [`Role`], belonging to teams and assigned to projects.
//! - [`Project`]: Owned by a single team, with a due date and a [`ProjectStatus`].
//! - [`Task`]: A unit of work inside a project, optionally assigned to a member.
//!
//! Entities reference each other by id only. References are advisory: nothing
//! checks that a referenced id exists, and deleting an entity does not touch
//! the records that point at it.
//!
//! # Session types
//!
//! - [`User`]: The authenticated account. Not a [`Member`].
//! - [`AuthResponse`]: Token and user returned by login and signup.

mod entity;
mod member;
mod option;
mod project;
mod task;
mod team;
mod user;

pub use entity::*;
pub use member::*;
pub use option::*;
pub use project::*;
pub use task::*;
pub use team::*;
pub use user::*;
