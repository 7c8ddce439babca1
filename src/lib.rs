pub mod color;
pub mod generator;

pub use color::parse_color;
pub use generator::{
    generate_placeholder, generate_placeholder_set, GeneratorConfig, DEFAULT_SIZE,
};
