use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use unscii_raw::config::{DEFAULT_HEIGHT, DEFAULT_PREFIX};
use unscii_raw::{convert_file, ConverterConfig};

#[derive(Debug, Parser)]
#[clap(
    name = "unscii2raw",
    version = "0.1.0",
    about = "Converts UNSCII .hex files into a C header file that can be used by SDL_DBGP.",
    long_about = "Converts UNSCII .hex files into a C header file that can be used by SDL_DBGP.\n\
                  Only exports the first 256 Unicode code points.\n\
                  Hex files can be found here: https://github.com/viznut/unscii"
)]
struct Cli {
    #[clap(
        short = 'B',
        long = "bytes",
        default_value_t = DEFAULT_HEIGHT,
        help = "Number of bytes per character (8 for UNSCII-8, 16 for UNSCII-16)"
    )]
    bytes: usize,

    #[clap(
        short = 'p',
        long = "prefix",
        default_value = DEFAULT_PREFIX,
        help = "Prefix of the generated identifiers"
    )]
    prefix: String,

    #[clap(short = 'd', long = "debug", help = "Enable debug logging")]
    debug: bool,

    #[clap(required = true, help = "The UNSCII .hex file to read")]
    input_file: PathBuf,

    #[clap(required = true, help = "The C header to write")]
    output_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let config = ConverterConfig {
        height: args.bytes,
        prefix: args.prefix,
    };

    convert_file(&args.input_file, &args.output_file, &config).with_context(|| {
        format!(
            "could not convert {} into {}",
            args.input_file.display(),
            args.output_file.display()
        )
    })?;

    Ok(())
}
