pub mod generator_name;
pub mod validation;

pub use generator_name::GeneratorName;
