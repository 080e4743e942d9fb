//! Command-line driver that exercises each diagnostics entry point from a
//! real process, so abort behaviour and standard error output can be
//! observed from outside.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;

use clap::{Arg, ArgAction, ArgMatches, Command, error::ErrorKind};
use diag::{
    ACTIVE_LEVEL, Level, check, check_eq, checks_active, log, log_debug, log_error, log_info,
};

const PROGRAM_NAME: &str = "diag-probe";

/// Exit status for command-line usage errors.
const USAGE_EXIT: u8 = 2;

/// Failure of a parsed invocation.
#[derive(Debug, thiserror::Error)]
enum RunError {
    /// Writing the report to standard output failed.
    #[error("writing output failed: {0}")]
    Output(#[from] io::Error),

    /// The command line parsed, but no handler exists for the subcommand.
    #[error("subcommand `{0}` has no handler")]
    Unhandled(String),

    #[error("no subcommand given")]
    MissingSubcommand,
}

fn command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Exercises the logging and invariant macros")
        .subcommand_required(true)
        .subcommand(Command::new("demo").about("Logs messages with zero to three fields"))
        .subcommand(
            Command::new("log")
                .about("Logs one message at the given level")
                .arg(
                    Arg::new("level")
                        .long("level")
                        .value_name("LEVEL")
                        .required(true)
                        .action(ArgAction::Set)
                        .value_parser(|text: &str| text.parse::<Level>()),
                )
                .arg(
                    Arg::new("message")
                        .long("message")
                        .value_name("TEXT")
                        .action(ArgAction::Set)
                        .default_value("probe message"),
                ),
        )
        .subcommand(
            Command::new("threads")
                .about("Logs concurrently from several threads")
                .arg(
                    Arg::new("threads")
                        .long("threads")
                        .value_name("N")
                        .action(ArgAction::Set)
                        .default_value("4")
                        .value_parser(clap::value_parser!(u32).range(1..=256)),
                )
                .arg(
                    Arg::new("lines")
                        .long("lines")
                        .value_name("M")
                        .action(ArgAction::Set)
                        .default_value("100")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(Command::new("check-pass").about("Runs checks that hold"))
        .subcommand(Command::new("check-fail").about("Fails a plain check"))
        .subcommand(Command::new("check-eq-fail").about("Fails an equality check"))
        .subcommand(Command::new("check-message").about("Fails a check with a message"))
        .subcommand(
            Command::new("active-level").about("Prints the compiled-in level and check mode"),
        )
}

/// Parses `args` and runs the selected scenario.
///
/// Scenario output meant for the caller goes to `stdout`; usage errors go to
/// `stderr`. Log lines and violation reports always go to the process's
/// standard error.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    finish(run(&matches, stdout), stderr)
}

fn finish<Err: Write>(result: Result<(), RunError>, stderr: &mut Err) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Output(error)) => {
            log_error!("writing output failed", error, error);
            ExitCode::FAILURE
        }
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            ExitCode::from(USAGE_EXIT)
        }
    }
}

fn report_usage<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Out: Write,
    Err: Write,
{
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = stdout.write_all(rendered.as_bytes());
            ExitCode::SUCCESS
        }
        _ => {
            let _ = stderr.write_all(rendered.as_bytes());
            ExitCode::from(USAGE_EXIT)
        }
    }
}

fn run<Out: Write>(matches: &ArgMatches, stdout: &mut Out) -> Result<(), RunError> {
    match matches.subcommand() {
        Some(("demo", _)) => demo(),
        Some(("log", sub)) => {
            let level = sub.get_one::<Level>("level").copied().unwrap_or(Level::Info);
            let message = sub
                .get_one::<String>("message")
                .map_or("probe message", String::as_str);
            log_at(level, message);
        }
        Some(("threads", sub)) => {
            let threads = sub.get_one::<u32>("threads").copied().unwrap_or(4);
            let lines = sub.get_one::<u32>("lines").copied().unwrap_or(100);
            log_from_threads(threads, lines);
        }
        Some(("check-pass", _)) => {
            checks_that_hold();
            writeln!(stdout, "passed")?;
        }
        Some(("check-fail", _)) => {
            let ready = false;
            failing_check(ready);
            writeln!(stdout, "check skipped")?;
        }
        Some(("check-eq-fail", _)) => {
            failing_equality();
            writeln!(stdout, "check skipped")?;
        }
        Some(("check-message", _)) => {
            failing_check_with_message(3);
            writeln!(stdout, "check skipped")?;
        }
        Some(("active-level", _)) => {
            let checks = if checks_active(cfg!(debug_assertions)) {
                "on"
            } else {
                "off"
            };
            writeln!(stdout, "level={ACTIVE_LEVEL}")?;
            writeln!(stdout, "checks={checks}")?;
        }
        Some((name, _)) => return Err(RunError::Unhandled(name.to_owned())),
        None => return Err(RunError::MissingSubcommand),
    }
    Ok(())
}

fn demo() {
    log_debug!("Message.");
    log_info!("Message.", key, "value");
    log_error!("Message.", key, "value", key2, 2);
    log_debug!("Message.", "c++version", "c++20", key2, 2, key3, 3);
}

/// Dispatches a level chosen at runtime to the matching constant-level call.
fn log_at(level: Level, message: &str) {
    match level {
        Level::None => log!(Level::None, message, source, PROGRAM_NAME, level, level),
        Level::Error => log_error!(message, source, PROGRAM_NAME, level, level),
        Level::Info => log_info!(message, source, PROGRAM_NAME, level, level),
        Level::Debug => log_debug!(message, source, PROGRAM_NAME, level, level),
    }
}

fn log_from_threads(threads: u32, lines: u32) {
    thread::scope(|scope| {
        for thread_index in 0..threads {
            scope.spawn(move || {
                for line_index in 0..lines {
                    log_info!("tick", thread, thread_index, line, line_index);
                }
            });
        }
    });
}

fn checks_that_hold() {
    let values = [2, 4, 8];
    check!(true);
    check!(values.iter().all(|value| value % 2 == 0));
    check_eq!(values.len(), 3);
    check_eq!(values[0] * 2, values[1], "doubling broke");
}

fn failing_check(ready: bool) {
    check!(ready);
}

fn failing_equality() {
    check_eq!(1, 2);
}

fn failing_check_with_message(pending: u32) {
    check!(pending == 0, "queue still holds {pending} items");
}
