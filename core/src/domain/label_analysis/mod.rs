pub mod entities;
pub mod parser;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use parser::{parse_label_analysis, parse_label_analysis_or};
pub use ports::*;
pub use value_objects::*;
