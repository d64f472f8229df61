//! Primitive Components
//!
//! Basic building blocks like checkboxes and labelled form fields.

pub mod checkbox;
pub mod field;
