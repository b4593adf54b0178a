use dfatlas::errors::*;
use dfatlas::workflow;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let settings = super::settings(matches)?;
    let records = workflow::generate_glyph_fields(&settings)?;

    info!(
        "Generated {} glyph fields in {:?}.",
        records.len(),
        settings.glyph_png_dir
    );

    Ok(())
}
