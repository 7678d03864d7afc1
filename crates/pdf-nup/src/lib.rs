pub mod compose;
mod constants;
mod duplicate;
pub mod layout;
mod options;
mod preview;
mod render;
mod stats;
mod types;

pub use compose::{compose, derive_output_path, load_pdf, save_pdf, validate_input_path};
pub use constants::*;
pub use duplicate::{duplicate, duplicate_order};
pub use options::*;
pub use preview::generate_preview;
pub use stats::{compose_statistics, duplicate_statistics};
pub use types::*;
