pub mod design_patterns;
