//! Motion math and move execution
//!
//! [`profile`] maps move progress to commanded speed; [`executor`]
//! turns that into rate-limited step requests, one tick at a time.

pub mod executor;
pub mod profile;

pub use executor::{MoveExecutor, MoveProgress};
pub use profile::VelocityProfile;
