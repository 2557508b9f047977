pub mod resume_data;

pub use resume_data::*;
