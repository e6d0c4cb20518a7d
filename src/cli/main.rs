//! Command-line interface entry point for `StudyProgress`

mod args;
mod commands;

use anyhow::Result;
use args::{Cli, Command};
use chrono::{Local, NaiveDate};
use clap::Parser;
use commands::open_store;
use std::path::PathBuf;
use std::process::ExitCode;
use study_progress::config::Config;
use study_progress::logging;
use tracing::{debug, error};

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flags win over the config file
    let level = if args.debug_flag {
        "debug".to_string()
    } else {
        args.log_level
            .map_or_else(|| config.logging.level.clone(), |lvl| lvl.to_string())
    };
    let verbose = args.verbose || config.logging.verbose;

    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };
    let log_path = args.log_file.clone().or(config_log_path);

    match logging::init(&level, log_path.as_deref(), verbose) {
        Ok(()) => {
            if let (true, Some(path)) = (verbose, &log_path) {
                eprintln!("✓ File logging initialized at: {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("✗ {e}");
            // Still log to stderr
            let _ = logging::init(&level, None, verbose);
        }
    }
    debug!(data_file = %config.paths.data_file, "configuration loaded");

    match run(args.command, &config, &defaults) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("✗ {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// The CLI is the only place that reads the wall clock
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn run(command: Command, config: &Config, defaults: &Config) -> Result<()> {
    match command {
        // Edit the stored config, not this run's overrides
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut Config::load(), defaults)
        }
        Command::Init => commands::data::init(&open_store(config)?),
        Command::Setup => commands::data::setup(&mut open_store(config)?),
        Command::Reset { yes } => commands::data::reset(&mut open_store(config)?, yes),
        Command::CreateProgram {
            name,
            planned_semesters,
            total_credits,
            start_date,
        } => commands::program::create(
            &mut open_store(config)?,
            &name,
            planned_semesters,
            total_credits,
            start_date,
        ),
        Command::CreateModule {
            name,
            credits,
            start_date,
            program_id,
        } => commands::module::create(
            &mut open_store(config)?,
            &name,
            credits,
            start_date,
            program_id,
        ),
        Command::AssignModule {
            program_id,
            module_id,
        } => commands::program::assign(&mut open_store(config)?, program_id, module_id),
        Command::AddExam {
            module_id,
            grade,
            date,
        } => commands::exam::add(&mut open_store(config)?, module_id, grade, date),
        Command::StartModule {
            module_id,
            date,
            override_existing,
        } => commands::module::start(
            &mut open_store(config)?,
            module_id,
            date.unwrap_or_else(today),
            override_existing,
        ),
        Command::DeleteModule { module_id } => {
            commands::module::delete(&mut open_store(config)?, module_id)
        }
        Command::DeleteExam { exam_id } => commands::exam::delete(&mut open_store(config)?, exam_id),
        Command::DeleteProgram { program_id } => {
            commands::program::delete(&mut open_store(config)?, program_id)
        }
        Command::List => {
            commands::program::list(&open_store(config)?);
            Ok(())
        }
        Command::ListModules { program_id } => {
            commands::module::list(&open_store(config)?, program_id);
            Ok(())
        }
        Command::ListExams { module_id } => {
            commands::exam::list(&open_store(config)?, module_id);
            Ok(())
        }
        Command::Stats => {
            commands::data::stats(&open_store(config)?);
            Ok(())
        }
        Command::Show {
            program_id,
            format,
            today: as_of,
            output,
        } => commands::show::run(
            &open_store(config)?,
            config,
            program_id,
            format,
            as_of.unwrap_or_else(today),
            output,
        ),
    }
}
