use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const STATUS_FAILURE: u16 = 500;

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    AlreadyExists {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The document is in a lending status that does not allow the requested transition.
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    AlreadyHeld {
        message: String,
    },
    NotHeld {
        message: String,
    },
    NotAllowedOnline {
        message: String,
    },
    Forbidden {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn already_exists(message: &str) -> LibraryError {
        LibraryError::AlreadyExists { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn conflict(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), reason_code }
    }

    pub fn already_held(message: &str) -> LibraryError {
        LibraryError::AlreadyHeld { message: message.to_string() }
    }

    pub fn not_held(message: &str) -> LibraryError {
        LibraryError::NotHeld { message: message.to_string() }
    }

    pub fn not_allowed_online(message: &str) -> LibraryError {
        LibraryError::NotAllowedOnline { message: message.to_string() }
    }

    pub fn forbidden(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Forbidden { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::AlreadyExists { message } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::Conflict { message, .. } => message,
            LibraryError::AlreadyHeld { message } => message,
            LibraryError::NotHeld { message } => message,
            LibraryError::NotAllowedOnline { message } => message,
            LibraryError::Forbidden { message, .. } => message,
            LibraryError::Validation { message, .. } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }

    // every failure reported by the lending desk uses the same status class
    pub fn status(&self) -> u16 {
        STATUS_FAILURE
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io failure {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<config::ConfigError> for LibraryError {
    fn from(err: config::ConfigError) -> Self {
        LibraryError::validation(
            format!("invalid configuration {}", err).as_str(), None)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Conflict { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Forbidden { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            other => {
                write!(f, "{}", other.message())
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the lending desk.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Receipt is the success report handed back to callers of catalog and lending operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub message: String,
    pub status: u16,
}

impl Receipt {
    pub fn ok(message: &str) -> Self {
        Receipt {
            message: message.to_string(),
            status: STATUS_OK,
        }
    }
}

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum LendingStatus {
    Available,
    AwaitingVerification,
    OnHold,
    NotReturned,
}

impl FromStr for LendingStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(LendingStatus::Available),
            "AwaitingVerification" => Ok(LendingStatus::AwaitingVerification),
            "OnHold" => Ok(LendingStatus::OnHold),
            "NotReturned" => Ok(LendingStatus::NotReturned),
            _ => Err(LibraryError::validation(
                format!("unknown lending status {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for LendingStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LendingStatus::Available => write!(f, "Available"),
            LendingStatus::AwaitingVerification => write!(f, "AwaitingVerification"),
            LendingStatus::OnHold => write!(f, "OnHold"),
            LendingStatus::NotReturned => write!(f, "NotReturned"),
        }
    }
}

// Role is the capability an actor brings to the lending desk.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Role {
    Staff,
    Patron,
}

impl FromStr for Role {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Staff" => Ok(Role::Staff),
            "Patron" => Ok(Role::Patron),
            _ => Err(LibraryError::validation(
                format!("unknown role {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Staff => write!(f, "Staff"),
            Role::Patron => write!(f, "Patron"),
        }
    }
}
