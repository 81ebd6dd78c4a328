//! School finder server.
//!
//! Finds education institutions near a point and estimates how long it
//! takes to get there on foot, by bike, by public transport or by car.

pub mod domain;
pub mod geo;
pub mod geocode;
pub mod search;
pub mod store;
pub mod travel;
pub mod web;
