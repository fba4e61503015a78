//! Portfolio allocation module for the asset-type breakdown.

mod allocation_model;
mod allocation_service;


pub use allocation_model::*;
pub use allocation_service::*;
