pub mod name_pattern;
pub mod paths;
