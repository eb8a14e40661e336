use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("headwarden")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("headwarden")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress banner and non-essential output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Log each request and score to stderr")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("analyze")
                .about(
                    "Fetch a host (or collection of hosts) once and grade the security headers \
                of the first response.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("The URL to analyze (https:// is assumed when no scheme is given)")
                        .conflicts_with("hosts-file"),
                )
                .arg(
                    arg!(-H --"hosts-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of URLs to analyze")
                        .conflicts_with("url"),
                )
                .arg(
                    arg!(-t --"threads" <NUM_WORKERS>)
                        .required(false)
                        .help("The number of analyses allowed in flight at once")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("4"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"verify-certs")
                        .required(false)
                        .help("Reject invalid or self-signed TLS certificates (default: accept them)")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"follow-redirects")
                        .required(false)
                        .help("Grade the final destination instead of the first response")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, csv, markdown")
                        .value_parser(["text", "json", "csv", "markdown", "md"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("headers").about("List the security headers that are graded, with their weights"),
        )
}
