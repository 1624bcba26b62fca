pub mod input_spec;
pub mod input_spec_gen4;
pub mod style;
pub mod transform_result;
