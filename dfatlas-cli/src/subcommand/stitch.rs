use dfatlas::errors::*;
use dfatlas::workflow;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let settings = super::settings(matches)?;
    let records = workflow::stitch_atlas(&settings)?;

    info!(
        "Stitched {} glyphs into {:?}.",
        records.len(),
        settings.atlas_output_path
    );

    Ok(())
}
