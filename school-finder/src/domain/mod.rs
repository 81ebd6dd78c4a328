//! Domain types for the school finder.
//!
//! This module contains the validated value types shared by the search
//! engine, the travel estimator and the collaborators around them. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod coordinate;
mod error;
mod institution;

pub use coordinate::Coordinate;
pub use error::ValidationError;
pub use institution::{Institution, InstitutionType, InvalidInstitutionType, Located, SchoolBusInfo};
