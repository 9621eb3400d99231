use anyhow::Result;
use std::path::{ Path, PathBuf };

use poeme_assistant::implementations::export::{ default_export_name, save_text };

use crate::cli::ui;

pub mod analyze;
pub mod generate;
pub mod interactive;
pub mod theme;

/// Where rendered output goes besides the terminal
pub struct Destination<'a> {
    pub output: Option<&'a Path>,
    pub save: bool,
}

impl Destination<'_> {
    /// The requested file, or a timestamped name when only `--save` was given
    pub fn path(&self) -> Option<PathBuf> {
        match (self.output, self.save) {
            (Some(path), _) => Some(path.to_path_buf()),
            (None, true) => Some(PathBuf::from(default_export_name(&chrono::Local::now()))),
            (None, false) => None,
        }
    }
}

/// Write `content` to the destination file, if any
pub fn write_output(destination: &Destination<'_>, content: &str) -> Result<()> {
    if let Some(path) = destination.path() {
        save_text(&path, content)?;
        ui::print_success(&format!("Saved to {}", path.display()));
    }
    Ok(())
}
