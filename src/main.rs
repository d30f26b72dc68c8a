use clap::Parser;
use tracing::Level;

use loc_scan::cli::Cli;
use loc_scan::output::write_output;
use loc_scan::scan_files;
use loc_scan::{EXIT_CONFIG_ERROR, EXIT_SCAN_FAILED, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) if e.is_config() => {
            eprintln!("Configuration error: {}", e.message());
            EXIT_CONFIG_ERROR
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_SCAN_FAILED
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> loc_scan::Result<i32> {
    // 1. Validate descriptor and read options before touching any file
    let syntax = cli.comment_syntax()?;
    let options = cli.scan_options();
    options.validate()?;

    // 2. Scan every file independently (parallel with rayon)
    let outcomes = scan_files(&cli.paths, &syntax, &options);

    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            tracing::warn!(path = %outcome.path.display(), error = %e.message(), "scan failed");
        }
    }

    // 3. Format and write output
    let output = cli.output_format().formatter().format(&outcomes)?;
    write_output(cli.output.as_deref(), &output)?;

    // 4. Determine exit code
    if outcomes.iter().any(|o| o.result.is_err()) {
        Ok(EXIT_SCAN_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}
