use clap::Parser;
use quotecard::cli::Cli;
use quotecard::config::Config;
use quotecard::logging::init_tracing;

fn main() {
    let cli = Cli::parse();

    // Config errors reach the user before logging exists.
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if init_tracing(&config.log) {
        tracing::info!(level = %config.log.level, "Logging started");
    }

    if let Err(err) = run(&config) {
        tracing::error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("quotecard-net")
        .build()?;
    quotecard::ui::run(config, runtime.handle())
}
