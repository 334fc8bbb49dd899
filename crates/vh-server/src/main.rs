//! Volunteer Hub command-line entry point.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{error, info, warn};
use vh_catalog::Catalog;
use vh_render::{PageGenerator, RenderConfig, Theme};
use vh_server::config::{resolve_data_path, ServerConfig};
use vh_server::exit_codes::ExitCode;
use vh_server::http::{AppState, ViewServer};
use vh_server::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "vh-server", version, about = "Volunteer Hub catalog server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the catalog over HTTP (the default when no command is given)
    Serve,
    /// Validate the data file and report per-record problems
    Check,
    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to the opportunities data file
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[arg(long, global = true, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the HTTP listener to
    #[arg(long, global = true, env = "VH_PORT", default_value_t = 8080)]
    port: u16,

    /// Page theme: light, dark, or auto
    #[arg(long, global = true, default_value_t = Theme::Auto)]
    theme: Theme,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log output format: human or jsonl
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Ok
            };
            std::process::exit(code.as_i32());
        }
    };

    let cli_level = if cli.global.quiet {
        Some(LogLevel::Error)
    } else {
        match cli.global.verbose {
            0 => None,
            1 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    };
    let log_config = LogConfig::from_env(cli_level, cli.global.log_format);
    init_logging(&log_config);

    let code = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_serve(&cli.global),
        Commands::Check => run_check(&cli.global),
        Commands::Version => run_version(),
    };
    std::process::exit(code.as_i32());
}

fn run_serve(opts: &GlobalOpts) -> ExitCode {
    let run_id = generate_run_id();
    let (data_path, data_source) = resolve_data_path(opts.data.clone());
    info!(
        run_id = %run_id,
        data = %data_path.display(),
        source = %data_source,
        "starting Volunteer Hub"
    );

    // A failed load is not fatal for serving: the process stays up with an
    // empty catalog and surfaces the problem as a page banner.
    let (catalog, banner) = match vh_catalog::load(&data_path) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                warn!(skipped = report.skipped.len(), "some records were skipped");
            }
            info!(
                records = report.catalog.len(),
                loaded_at = %report.loaded_at,
                "catalog ready"
            );
            (report.catalog, None)
        }
        Err(e) => {
            error!(error = %e, "could not load catalog");
            (Catalog::empty(), Some(e.headline()))
        }
    };

    let generator = PageGenerator::new(RenderConfig::default().with_theme(opts.theme));
    let state = AppState {
        catalog,
        banner,
        generator,
    };
    let server_config = ServerConfig {
        bind: opts.bind.clone(),
        port: opts.port,
        data_path,
        data_source,
    };

    let server = match ViewServer::start(&server_config, state) {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "could not start server");
            return ExitCode::BindError;
        }
    };

    info!(addr = %server.addr(), "listening; press Ctrl-C to stop");
    server.join();
    ExitCode::Ok
}

fn run_check(opts: &GlobalOpts) -> ExitCode {
    let (data_path, data_source) = resolve_data_path(opts.data.clone());
    println!("data file: {} ({})", data_path.display(), data_source);

    match vh_catalog::load(&data_path) {
        Ok(report) => {
            println!("records loaded: {}", report.catalog.len());
            if report.skipped.is_empty() {
                println!("result: ok");
                ExitCode::Ok
            } else {
                println!("records skipped: {}", report.skipped.len());
                for skip in &report.skipped {
                    println!("  [{}] {}", skip.index, skip.reason);
                }
                println!("result: ok with warnings");
                ExitCode::CheckWarnings
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::DataError
        }
    }
}

fn run_version() -> ExitCode {
    println!("vh-server {}", env!("CARGO_PKG_VERSION"));
    ExitCode::Ok
}
