//! Renames a directory of episode files to canonical `S{season}E{episode}`
//! names, following a JSON descriptor of season labels and episode counts.

pub mod descriptor;
pub mod driver;
pub mod error;
pub mod file_list;
pub mod plan;
pub mod rename_engine;
pub mod season;
pub mod tui;

pub use descriptor::{load_descriptor, SeasonSpec};
pub use driver::{run, ConfigBuilder, RunConfig, RunMode};
pub use error::{RenameError, RenameResult};
pub use file_list::list_files;
pub use plan::{build_plan, FileRename, RenamePlan};
pub use season::extract_season_number;
