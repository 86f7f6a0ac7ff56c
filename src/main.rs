use log::debug;
use match_svg::Commands;
use match_svg::cli_args::parse_command;
use match_svg::commands::{print_usage, report_failure, run_init_command};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match parse_command(std::env::args_os()) {
        Ok(command) => command,
        Err(e) => e.exit(),
    };
    match command {
        Some(Commands::Init(args)) => match run_init_command(&args) {
            Ok(report) => {
                debug!("init finished: {report:?}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                report_failure(&e);
                ExitCode::FAILURE
            }
        },
        Some(Commands::Other(args)) => {
            debug!("unrecognised subcommand: {args:?}");
            print_usage();
            ExitCode::SUCCESS
        }
        None => {
            print_usage();
            ExitCode::SUCCESS
        }
    }
}
