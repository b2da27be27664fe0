use calculate_area::utils::logger;
use calculate_area::{app, AreaError, CliConfig};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.output.is_some());

    let stdout = std::io::stdout();
    if let Err(e) = app::run(config, &mut stdout.lock()) {
        fail(e);
    }
}

fn fail(e: AreaError) -> ! {
    tracing::error!("{}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
