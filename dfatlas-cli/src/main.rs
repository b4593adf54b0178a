#[macro_use]
extern crate log;

mod subcommand;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cmd_generate = clap::SubCommand::with_name("generate")
        .about("Generate one minified distance field per glyph png")
        .arg(
            clap::Arg::with_name("settings")
                .required(true)
                .index(1)
                .help("Set the settings json file"),
        );

    let cmd_stitch = clap::SubCommand::with_name("stitch")
        .about("Pack the glyph distance fields into an atlas")
        .arg(
            clap::Arg::with_name("settings")
                .required(true)
                .index(1)
                .help("Set the settings json file"),
        );

    let cmd_visualize = clap::SubCommand::with_name("visualize")
        .about("Write a distance field as a png")
        .arg(
            clap::Arg::with_name("path")
                .short("p")
                .required(true)
                .takes_value(true)
                .help("Path to the .df file"),
        );

    let cmd_field = clap::SubCommand::with_name("field")
        .about("Compute the distance field of a 1 or 4 channel png")
        .arg(
            clap::Arg::with_name("image")
                .required(true)
                .index(1)
                .help("Set the source png"),
        )
        .arg(
            clap::Arg::with_name("output")
                .required(true)
                .index(2)
                .help("Set the output .df file"),
        );

    let matches = clap::App::new("dfatlas")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .subcommand(cmd_generate)
        .subcommand(cmd_stitch)
        .subcommand(cmd_visualize)
        .subcommand(cmd_field)
        .get_matches();

    let result = match matches.subcommand() {
        ("generate", Some(matches)) => subcommand::generate::execute(matches),
        ("stitch", Some(matches)) => subcommand::stitch::execute(matches),
        ("visualize", Some(matches)) => subcommand::visualize::execute(matches),
        ("field", Some(matches)) => subcommand::field::execute(matches),
        _ => Ok(()),
    };

    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }
}
