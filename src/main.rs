use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, info, warn};

use curlconvert::{parse, render_with, CurlRequest, Error, RenderOptions, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Part {
    Url,
    Params,
    Headers,
    Cookies,
    Data,
    Method,
}

fn command_args() -> [Arg; 2] {
    [
        Arg::new("command")
            .help("The input curl command string; read from --file or stdin when absent")
            .required(false)
            .index(1),
        Arg::new("file")
            .short('f')
            .long("file")
            .value_name("PATH")
            .help("Read the curl command from a file")
            .conflicts_with("command")
            .value_parser(clap::value_parser!(PathBuf)),
    ]
}

fn cli() -> Command {
    Command::new("curlconvert")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn a curl command into url, params, headers, cookies, data and method")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a curl command as variable declarations")
                .args(command_args())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Write the result to a file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .value_name("N")
                        .help("Spaces per indentation level")
                        .default_value("4")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the parsed request as JSON")
                .args(command_args())
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Only print one part of the request (url, params, headers, cookies, data, method)")
                        .required(false)
                        .value_parser(clap::value_parser!(Part)),
                ),
        )
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// The command text, from the argument, a file or stdin, in that order.
fn read_command(matches: &ArgMatches) -> Result<String> {
    if let Some(command) = matches.get_one::<String>("command") {
        return Ok(command.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("file") {
        info!("reading curl command from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }
    debug!("reading curl command from stdin");
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn select_part(request: &CurlRequest, part: Part) -> Result<serde_json::Value> {
    let value = match part {
        Part::Url => serde_json::to_value(&request.url)?,
        Part::Params => serde_json::to_value(&request.params)?,
        Part::Headers => serde_json::to_value(&request.headers)?,
        Part::Cookies => serde_json::to_value(&request.cookies)?,
        Part::Data => serde_json::to_value(&request.data)?,
        Part::Method => serde_json::to_value(&request.method)?,
    };
    Ok(value)
}

fn run_convert(matches: &ArgMatches, command: &str) -> Result<()> {
    let options = RenderOptions {
        indent: matches.get_one::<usize>("indent").copied().unwrap_or(4),
    };
    let request = parse(command)?;
    let text = render_with(&request, &options);

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            fs::write(path, &text)?;
            info!("saved to file: {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn run_parse(matches: &ArgMatches, command: &str) -> Result<()> {
    let request = parse(command)?;
    let value = match matches.get_one::<Part>("part") {
        Some(part) => select_part(&request, *part)?,
        None => serde_json::to_value(&request)?,
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logger(matches.get_count("verbose"));

    let Some((name, sub_matches)) = matches.subcommand() else {
        return ExitCode::from(2);
    };

    let command = match read_command(sub_matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if command.trim().is_empty() {
        warn!("empty input");
        eprintln!("Please enter the curl command!");
        return ExitCode::from(2);
    }

    let result = match name {
        "convert" => run_convert(sub_matches, &command),
        "parse" => run_parse(sub_matches, &command),
        _ => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::Parse(_)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Failed to convert: {}", e);
            ExitCode::FAILURE
        }
    }
}
