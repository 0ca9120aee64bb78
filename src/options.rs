use clap::{AppSettings, ArgEnum, Parser};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use levelog::{Config, Level, TimeFormat};

const OPTIONS_PATH_ENV: &str = "LEVELOG_OPTIONS_PATH";

const IGNORED_CLAP_ERRORS: [clap::error::ErrorKind; 2] = [
    clap::error::ErrorKind::DisplayHelp,
    clap::error::ErrorKind::DisplayVersion,
];

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq)]
pub enum Threshold {
    Info,
    Debug,
    Trace,
}

impl From<Threshold> for Level {
    fn from(threshold: Threshold) -> Self {
        match threshold {
            Threshold::Info => Level::Info,
            Threshold::Debug => Level::Debug,
            Threshold::Trace => Level::Trace,
        }
    }
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Error,
    Warn,
    TmpWarn,
    Info,
    Debug,
    Trace,
}

#[allow(clippy::doc_markdown)]
#[derive(Parser, Debug)]
#[clap(
    name = "levelog",
    version,
    long_version = long_version_output(),
    verbatim_doc_comment,
    setting(AppSettings::DeriveDisplayOrder)
)]
/**
Print a leveled log message.

Every `{}` in the message is replaced by the next argument.

## Usage examples

    levelog "Deploy started"
      [ INFO ] Deploy started

    levelog --severity warn "Disk {} is {}% full" /dev/sda1 91
      [ WARN ] Disk /dev/sda1 is 91% full

    levelog --severity tmp-warn "Lost connection to {}" db-1
      [ TMP_WARN ] Lost connection to db-1

    levelog --level debug --severity debug --time "Cache warmed"
      [2017-02-20 12:12:12.567] [ DEBUG ]     Cache warmed

## Environment

    LEVELOG_LEVEL          Threshold level: info, debug or trace
    LEVELOG_SHOW_TIME      Print timestamps: true or false
    LEVELOG_TIME_FORMAT    Timestamp pattern, e.g. yyyy-MM-dd HH:mm:ss.SSS
    NO_COLOR               Disable color output

## Options file

    Use an options file to add defaults to every Levelog call. Configure the
    options file path with the `LEVELOG_OPTIONS_PATH` system environment
    variable.

         # Always print timestamps
         --time
         # Print the time only
         --time-format HH:mm:ss
*/
pub struct Options {
    /// Threshold level. Messages with a lower severity are not printed
    #[clap(long, arg_enum, help_heading = "FILTER")]
    pub level: Option<Threshold>,

    /// Severity of the message [default: info]
    #[clap(long, arg_enum, help_heading = "FILTER")]
    pub severity: Option<Severity>,

    /// Print the time in front of the message
    #[clap(long, help_heading = "OUTPUT")]
    pub time: bool,

    /// Timestamp pattern, e.g. `yyyy-MM-dd HH:mm:ss.SSS`
    #[clap(long, name = "pattern", help_heading = "OUTPUT")]
    pub time_format: Option<String>,

    /// Enable color output
    #[clap(long = "color", help_heading = "OUTPUT")]
    pub color: bool,

    /// Disable color output
    #[clap(long = "no-color", help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Prints debug information of Levelog itself
    #[clap(long, help_heading = "OUTPUT")]
    pub debug: bool,

    /// Message to print
    #[clap(name = "message")]
    pub message: Option<String>,

    /// Values for the `{}` placeholders in the message
    #[clap(name = "args")]
    pub args: Vec<String>,
}

impl Options {
    pub fn severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Info)
    }

    /// Return color config option value, falling back on the environment config
    pub fn color(&self, default: bool) -> bool {
        if self.no_color {
            return false;
        }
        if self.color {
            return true;
        }
        default
    }

    pub fn merge(&mut self, options: Vec<String>) {
        self.update_from(options);
    }

    /// Apply the options on top of the given config.
    pub fn config(&self, mut config: Config) -> Result<Config, levelog::Error> {
        if let Some(level) = self.level {
            config.level = level.into();
        }
        if self.time {
            config.show_time = true;
        }
        if let Some(pattern) = &self.time_format {
            config.time_format = TimeFormat::parse(pattern)?;
        }
        config.color = self.color(config.color);
        Ok(config)
    }
}

/// Parse the CLI arguments on top of the options file set with `LEVELOG_OPTIONS_PATH`.
pub fn fetch_options() -> Options {
    let args = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<String>>();
    match file_options(env::var(OPTIONS_PATH_ENV)) {
        Some((path, defaults)) => {
            let mut opts = options_from_file(&path, defaults);
            opts.merge(args);
            opts
        }
        None => Options::parse_from(args),
    }
}

fn file_options(env_path: Result<String, env::VarError>) -> Option<(PathBuf, Vec<String>)> {
    let path = PathBuf::from(env_path.ok()?);
    match fs::read_to_string(&path) {
        Ok(contents) => Some((path, parse_options_file(&contents))),
        Err(e) => {
            eprintln!(
                "ERROR: Unable to read {} '{}': {}",
                OPTIONS_PATH_ENV,
                path.display(),
                e
            );
            None
        }
    }
}

// One or more flags per line, lines starting with `#` are comments
fn parse_options_file(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(String::from)
        .collect()
}

fn options_from_file(path: &Path, defaults: Vec<String>) -> Options {
    let args = std::iter::once("levelog".to_string()).chain(defaults);
    Options::try_parse_from(args).unwrap_or_else(|e| {
        if !IGNORED_CLAP_ERRORS.contains(&e.kind()) {
            eprintln!("ERROR: Invalid options in {}:", path.display());
        }
        e.exit()
    })
}

// Print the long version label including the target for which it was built
fn long_version_output() -> &'static str {
    concat!(
        clap::crate_version!(),
        "\n",
        env!("LEVELOG_BUILD_TARGET_TRIPLE")
    )
}
