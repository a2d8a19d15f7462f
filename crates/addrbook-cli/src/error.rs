use addrbook_config::ConfigError;
use addrbook_core::CoreError;
use addrbook_store::{StoreError, StoreErrorKind};
use anyhow::Error;
use std::fmt;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Positional argument a handler needed but did not get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Name,
    Phone,
    OldPhone,
    NewPhone,
    Birthday,
    Query,
}

impl Argument {
    pub fn prompt(self) -> &'static str {
        match self {
            Argument::Name => "Give me a name, please",
            Argument::Phone => "Give me a phone number, please",
            Argument::OldPhone => "Give me the old phone number, please",
            Argument::NewPhone => "Give me the new phone number, please",
            Argument::Birthday => "Give me a birthday in format DD.MM.YYYY, please",
            Argument::Query => "Give me something to search for, please",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Contact(String),
    Phone { name: String, phone: String },
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Contact(name) => write!(f, "Contact {name} not found"),
            Missing::Phone { name, phone } => write!(f, "Phone {phone} not found for {name}"),
        }
    }
}

/// Everything a command handler can fail with. The display text is the reply shown at the
/// prompt.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("{}", .0.prompt())]
    MissingArgument(Argument),
    #[error("{0}")]
    Validation(CoreError),
    #[error("{0}")]
    NotFound(Missing),
    #[error("The contact has no date of birth")]
    NoBirthday(String),
    #[error("{}", persistence_message(.0))]
    Persistence(#[from] StoreError),
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ContactNotFound(name) => CommandError::NotFound(Missing::Contact(name)),
            CoreError::PhoneNotFound { name, phone } => {
                CommandError::NotFound(Missing::Phone { name, phone })
            }
            other => CommandError::Validation(other),
        }
    }
}

fn persistence_message(err: &StoreError) -> String {
    match err {
        StoreError::NotFound(path) => format!("File {} not found", path.display()),
        StoreError::UnsupportedFormat(path) => format!(
            "Unsupported file type {} (use .json, .db or .csv)",
            path.display()
        ),
        StoreError::Malformed { path, reason } => {
            format!("File {} is damaged: {reason}", path.display())
        }
        other => format!("Could not access the file: {other}"),
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::NotFound => EXIT_NOT_FOUND,
        StoreErrorKind::InvalidDataPath
        | StoreErrorKind::UnsupportedFormat
        | StoreErrorKind::Malformed
        | StoreErrorKind::Json => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Schema
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidPageSize(_)
        | ConfigError::InvalidBookPath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
