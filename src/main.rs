use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use dataconv::cli::CliArgs;
use dataconv::convert::{convert, ALL_FORMATS};
use dataconv::logging;
use dataconv::settings::Settings;

fn main() -> Result<()> {
    logging::init();

    let args = CliArgs::parse();

    if args.list_formats {
        for format in ALL_FORMATS {
            println!("{}", format.key());
        }
        return Ok(());
    }

    let format = args.parse_format()?;
    let settings = Settings::load();
    let opts = args.into_options(&settings)?;

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let conversion = convert(&text, format, &opts)
        .with_context(|| format!("conversion to {format} failed"))?;

    print!("{}", conversion.output);
    if !conversion.output.ends_with('\n') {
        println!();
    }
    if args.syntax {
        eprintln!("{}", conversion.syntax);
    }

    Ok(())
}
