use std::env;
use std::ffi::OsStr;

use log::error;
use seahorse::{App, Command, Context, Flag, FlagType};

use attendance_sheet::calendar::training_date;
use attendance_sheet::config::Schedule;
use attendance_sheet::evaluate_day;
use attendance_sheet::form::{self, PlainLabels};
use attendance_sheet::time::ClockTime;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

// seahorse actions are plain function pointers, so every fallible action gets
// a wrapper that logs the error and exits non-zero
fn report_errors(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

/// An absent or blank flag is an unrecorded reading, not an error.
fn time_flag(context: &Context, name: &str) -> anyhow::Result<Option<ClockTime>> {
    let Ok(value) = context.string_flag(name) else {
        return Ok(None);
    };

    if value.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(value.trim().parse()?))
}

fn schedule_flag(context: &Context) -> anyhow::Result<Schedule> {
    match context.string_flag("config") {
        Ok(path) => Schedule::try_from_toml_file(path),
        Err(_) => Ok(Schedule::default()),
    }
}

fn day(context: &Context) -> anyhow::Result<()> {
    let schedule = schedule_flag(context)?;
    let start = time_flag(context, "start")?;
    let end = time_flag(context, "end")?;

    let report = evaluate_day(&schedule, training_date(), start, end);

    if context.bool_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("date:    {}", report.date().format("%Y/%-m/%-d"));
        println!("status:  {}", report.status());
        println!("counted: {}", report.counted());
    }

    Ok(())
}

fn day_action(context: &Context) {
    report_errors(day(context));
}

fn breaks(_context: &Context) -> anyhow::Result<()> {
    for (minutes, label) in form::break_options(&PlainLabels) {
        let Some(minutes) = minutes else {
            continue;
        };

        println!("{:3} {}", minutes, label);
    }

    Ok(())
}

fn breaks_action(context: &Context) {
    report_errors(breaks(context));
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let day_command = Command::new("day")
        .usage(format!("{} day [args]", args[0]))
        .description("Judges one day's readings and counts the attended time.")
        .flag(
            Flag::new("start", FlagType::String)
                .description("Clock-in reading, like \"09:15\". Omit if it was not recorded."),
        )
        .flag(
            Flag::new("end", FlagType::String)
                .description("Clock-out reading, like \"17:50\". Omit if it was not recorded."),
        )
        .flag(
            Flag::new("config", FlagType::String)
                .description("[optional] Path to a schedule file. Default: the built-in schedule."),
        )
        .flag(Flag::new("json", FlagType::Bool).description("[optional] Prints the report as json."))
        .action(day_action);

    let breaks_command = Command::new("breaks")
        .usage(format!("{} breaks", args[0]))
        .description("Lists the selectable break lengths.")
        .action(breaks_action);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [args]", args[0]))
        .command(day_command)
        .command(breaks_command);

    app.run(args);
}
