// src/candidates/handlers/mod.rs

pub mod resumes;
pub mod results;

pub use resumes::*;
pub use results::*;
