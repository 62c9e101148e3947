//! Reusable form components.

pub mod checkbox;
pub mod input_field;

pub use checkbox::render_checkbox;
pub use input_field::{input_field_height, render_input_field, InputFieldConfig};
