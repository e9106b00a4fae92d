use clap::{Args, Parser, Subcommand};

use envlaunch::error::exit_code_for_error;
use envlaunch::launcher::{DEFAULT_LAUNCHER_BIN, DEFAULT_PORT};

mod commands;
mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "envlaunch")]
#[command(version = VERSION)]
#[command(about = "Normalize serving environment variables and hand off to the launcher")]
struct Cli {
    #[command(flatten)]
    launcher: LauncherOpts,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Handoff target. Defaults match the hosting platform contract; overrides
/// exist for local debugging.
#[derive(Args)]
pub struct LauncherOpts {
    /// Launcher binary to hand control to
    #[arg(long, global = true, env = "LAUNCHER_BIN", default_value = DEFAULT_LAUNCHER_BIN)]
    pub launcher_bin: String,

    /// Port the launcher binds
    #[arg(long, global = true, env = "LAUNCHER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the environment and launch (the default when no subcommand is given)
    Run,
    /// Resolve the environment and print the launch plan without launching
    Check,
    /// List the supported variable translations
    Vars,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => match commands::run::run(&cli.launcher) {
            Ok(code) => code,
            Err(err) => {
                output::print_error_diagnostic(&err);
                exit_code_for_error(err.code)
            }
        },
        Commands::Check => {
            let (json_result, exit_code) =
                output::map_cmd_result_to_json(commands::check::run(&cli.launcher));
            output::print_json_result(json_result);
            exit_code
        }
        Commands::Vars => {
            let (json_result, exit_code) = output::map_cmd_result_to_json(commands::vars::run());
            output::print_json_result(json_result);
            exit_code
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
