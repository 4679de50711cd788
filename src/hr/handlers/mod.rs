// src/hr/handlers/mod.rs

pub mod candidates;
pub mod dashboard;
pub mod selection;
pub mod skills;
