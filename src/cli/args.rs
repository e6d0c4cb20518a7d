//! CLI argument definitions for `StudyProgress`

use chrono::NaiveDate;
use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use study_progress::config::ConfigOverrides;
use study_progress::report::ReportFormat;
use study_progress::store::{ExamId, ModuleId, ProgramId};

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
    /// Trace-level logging
    Trace,
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{value}', expected YYYY-MM-DD"))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Create an empty data file if none exists.
    Init,
    /// Create the sample program with its module list.
    Setup,
    /// Delete all programs, modules and exam results.
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create a degree program.
    CreateProgram {
        /// Program name
        name: String,
        /// Planned number of semesters
        #[arg(value_name = "SEMESTERS")]
        planned_semesters: u32,
        /// Credit target (ECTS)
        #[arg(value_name = "CREDITS")]
        total_credits: u32,
        /// First day of study (YYYY-MM-DD)
        #[arg(value_name = "START", value_parser = parse_date)]
        start_date: NaiveDate,
    },
    /// Create a module, optionally assigning it to a program.
    CreateModule {
        /// Module name
        name: String,
        /// Credits awarded on completion (ECTS)
        credits: u32,
        /// Day work on the module started (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", value_parser = parse_date)]
        start_date: Option<NaiveDate>,
        /// Assign the module to this program right away
        #[arg(long, value_name = "ID")]
        program_id: Option<ProgramId>,
    },
    /// Assign an existing module to a program.
    AssignModule {
        /// Program id
        program_id: ProgramId,
        /// Module id
        module_id: ModuleId,
    },
    /// Record the exam result that completes a module.
    AddExam {
        /// Module id
        module_id: ModuleId,
        /// Grade between 1.0 and 4.0
        grade: f64,
        /// Exam date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Set the start date of a module.
    StartModule {
        /// Module id
        module_id: ModuleId,
        /// Start date (YYYY-MM-DD); defaults to today
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Replace a start date that is already set
        #[arg(short = 'o', long = "override")]
        override_existing: bool,
    },
    /// Delete a module together with its exam result.
    DeleteModule {
        /// Module id
        module_id: ModuleId,
    },
    /// Delete an exam result.
    DeleteExam {
        /// Exam result id
        exam_id: ExamId,
    },
    /// Delete a program; its modules stay, unassigned.
    DeleteProgram {
        /// Program id
        program_id: ProgramId,
    },
    /// List all programs.
    List,
    /// List modules.
    ListModules {
        /// Only modules of this program
        #[arg(long, value_name = "ID")]
        program_id: Option<ProgramId>,
    },
    /// List exam results.
    ListExams {
        /// Only the result of this module
        #[arg(long, value_name = "ID")]
        module_id: Option<ModuleId>,
    },
    /// Show record counts.
    Stats,
    /// Show the progress dashboard of a program.
    Show {
        /// Program id
        program_id: ProgramId,
        /// Output format: text (txt), markdown (md), or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: ReportFormat,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long, value_name = "DATE", value_parser = parse_date)]
        today: Option<NaiveDate>,
        /// Write the report into this directory instead of printing it
        ///
        /// Without a value, the configured reports directory is used.
        #[arg(short, long, value_name = "DIR", num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studyprogress",
    about = "Track progress through a degree program",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level. Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data file path
    #[arg(long = "data-file", value_name = "PATH", global = true)]
    pub data_file: Option<PathBuf>,

    /// Override the reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_file: self
                .data_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
