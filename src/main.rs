// git-remote-sync: Remote push/pull/fetch orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Remotes | Select | Create | Delete | Push | Pull | Fetch
//!   Options | Configs | Version
//! ```

use std::process::ExitCode;

use git_remote_sync::cli::global::GlobalOptions;
use git_remote_sync::cli::{self, Command};
use git_remote_sync::cmd::config::{run_configs_command, run_options_command};
use git_remote_sync::cmd::remote::{
    run_create_command, run_delete_command, run_fetch_command, run_pull_command,
    run_push_command, run_remotes_command, run_select_command,
};
use git_remote_sync::config::loader::ConfigLoader;
use git_remote_sync::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use git_remote_sync::logging::init_logging;
use git_remote_sync::logging::LogConfig;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let Ok(config) = load_config(&cli.global) else {
        return ExitCode::FAILURE;
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let global = &cli.global;
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(&build_config_loader(global).format_loaded_files());
            Ok(())
        }
        Some(Command::Remotes) => run_remotes_command(global, config).await,
        Some(Command::Select(args)) => run_select_command(args, global, config).await,
        Some(Command::Create(args)) => run_create_command(args, global, config).await,
        Some(Command::Delete(args)) => run_delete_command(args, global, config).await,
        Some(Command::Push(args)) => run_push_command(args, global, config).await,
        Some(Command::Pull(args)) => run_pull_command(args, global, config).await,
        Some(Command::Fetch(args)) => run_fetch_command(args, global, config).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_local_config {
        loader = loader.add_toml_file_optional(LOCAL_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> git_remote_sync::error::Result<Config> {
    global
        .apply_overrides(build_config_loader(global))
        .and_then(ConfigLoader::build)
        .map_err(|e| {
            eprintln!("Failed to load config: {e:#}");
            e
        })
}

