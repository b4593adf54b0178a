use dfatlas::errors::*;
use dfatlas::workflow;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let image = matches.value_of("image").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let df = workflow::generate_field(image, output)?;
    info!("Field of {} is {}x{}.", image, df.w, df.h);
    Ok(())
}
