//! cliptrans CLI entry point

use std::process::ExitCode;

use clap::Parser;

use cliptrans::cli::{
    app::{
        cli_overrides, load_merged_config, translate_notifier_kind, watch_notifier_kind,
        EXIT_ERROR, EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    init_logging,
    presenter::Presenter,
    run_translate, run_watch,
};
use cliptrans::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Validated up front, but only needed by the translating commands
    let overrides = cli_overrides(&cli);
    let notify_flag = cli.notify;

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Watch => {
            let overrides = match overrides {
                Ok(overrides) => overrides,
                Err(e) => {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            let config = load_merged_config(overrides).await;
            let notifier = watch_notifier_kind(&config);
            run_watch(config, notifier).await
        }
        Commands::Translate { text } => {
            let overrides = match overrides {
                Ok(overrides) => overrides,
                Err(e) => {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            let config = load_merged_config(overrides).await;
            run_translate(config, translate_notifier_kind(notify_flag), &text).await
        }
    }
}
