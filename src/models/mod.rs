//! Data models for the DentalFlow clinic application.
//!
//! Wire names match the frontend interfaces exactly for seamless
//! interoperability with previously persisted data.

mod attachment;
mod incident;
mod patient;
mod user;

pub use attachment::*;
pub use incident::*;
pub use patient::*;
pub use user::*;
