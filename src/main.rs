use content_type::{parse_content_type, ContentType};

use std::{fs, path::PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, LevelFilter};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "ctutil")]
struct AppArgs {
    /// Log more, can be repeated up to three times
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    Canonical(CanonicalArgs),
    Inspect(InspectArgs),
    Check(CheckArgs),
}

/// Print the canonical form of content-type header values
#[derive(StructOpt, Debug)]
struct CanonicalArgs {
    /// Header values, without the `Content-Type:` name
    #[structopt(name = "Header", required = true)]
    headers: Vec<String>,
}

/// Show every part of a content-type header value
#[derive(StructOpt, Debug)]
struct InspectArgs {
    #[structopt(name = "Header")]
    header: String,
}

/// Check a file with one header value per line
#[derive(StructOpt, Debug)]
struct CheckArgs {
    #[structopt(name = "File", parse(from_os_str))]
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = AppArgs::from_args();

    simple_logger::SimpleLogger::new()
        .with_level(log_level(args.verbose))
        .init()
        .map_err(|e| anyhow!("Unable to set up logging: {}", e))?;

    match args.cmd {
        Command::Canonical(args) => canonical(args),
        Command::Inspect(args) => inspect(args),
        Command::Check(args) => check(args),
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn canonical(args: CanonicalArgs) -> Result<()> {
    for header in &args.headers {
        let parsed = parse_content_type(header)
            .with_context(|| format!("Unable to parse {:?}", header))?;
        println!("{}", parsed);
    }

    Ok(())
}

fn inspect(args: InspectArgs) -> Result<()> {
    let parsed: ContentType = args
        .header
        .parse()
        .with_context(|| format!("Unable to parse {:?}", args.header))?;

    println!("type: {}", parsed.type_());
    println!("subtype: {}", parsed.subtype());
    println!("mime type: {}", parsed.mime_type());
    println!("charset: {}", parsed.charset().unwrap_or("-"));

    if parsed.parameters_len() > 0 {
        println!("parameters:");
        for (name, value) in parsed.parameters() {
            println!("  {} = {}", name, value);
        }
    }

    Ok(())
}

fn check(args: CheckArgs) -> Result<()> {
    let data = fs::read_to_string(&args.file)
        .with_context(|| format!("Could not read {:?}", args.file))?;

    let mut total = 0;
    let mut malformed = 0;

    for line in data.lines().filter(|l| !l.is_empty()) {
        total += 1;

        match parse_content_type(line) {
            Ok(parsed) => println!("ok {}", parsed),
            Err(e) => {
                malformed += 1;
                println!("malformed {} (at byte {})", line, e.offset());
            }
        }
    }

    debug!("checked {} header values from {:?}", total, args.file);

    if malformed > 0 {
        bail!("{} of {} header values were malformed", malformed, total);
    }

    Ok(())
}
