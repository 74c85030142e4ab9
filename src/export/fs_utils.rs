// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` is set → Ok
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
