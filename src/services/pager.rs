use std::env;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

const DEFAULT_PAGER: &str = "less";

/// Opens the wordlist in the user's pager and waits for it to exit.
/// Launching counts as success; how the pager quits is its own business.
pub fn view(path: &Path) -> Result<()> {
    let pager = env::var("PAGER").unwrap_or_else(|_| DEFAULT_PAGER.to_string());

    debug!("viewing {} with `{pager}`", path.display());

    let status = Command::new(&pager)
        .arg(path)
        .status()
        .map_err(Error::Pager)?;

    if !status.success() {
        debug!("pager exited with {:?}", status.code());
    }

    Ok(())
}
