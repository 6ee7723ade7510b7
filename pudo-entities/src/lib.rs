#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # pudo-entities
//!
//! Reusable, agnostic domain entities for the PUDO locator map and the
//! parcel tracking viewer.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod parcel;
pub mod pudo;
