pub mod field;
pub mod generate;
pub mod stitch;
pub mod visualize;

use dfatlas::errors::*;
use dfatlas::workflow::Settings;

/// Loads the settings named by the `settings` argument.
pub fn settings(matches: &clap::ArgMatches) -> Result<Settings> {
    let path = matches.value_of("settings").unwrap_or("settings.json");
    Settings::load(path)
}
