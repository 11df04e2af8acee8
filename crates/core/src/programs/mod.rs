//! Loyalty programs module - domain models.

mod programs_model;

pub use programs_model::{NewProgram, Program, ProgramCategory, ProgramSubcategory, ProgramUpdate};
