mod api;
pub mod config;
pub mod contents;
pub mod document;
pub mod errors;
pub mod materialize;
pub mod preview;
pub mod prompt;
pub mod tree;
pub mod vfs;

pub use api::{
    plan_structure, preview_structure_file, process_structure_file, SproutError,
};
pub use config::Settings;
pub use materialize::Summary;
