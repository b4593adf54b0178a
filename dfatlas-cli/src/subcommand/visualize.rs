use dfatlas::errors::*;
use dfatlas::workflow;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches.value_of("path").unwrap_or_default();
    let output = workflow::visualize(path)?;

    info!("output file name = {:?}", output);
    Ok(())
}
