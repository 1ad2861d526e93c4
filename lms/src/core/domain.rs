use std::fmt;
use std::fmt::{Display, Formatter};
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub const DEFAULT_BRANCH: &str = "main";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// ReturnPolicy decides which lending status a return may be recorded from.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ReturnPolicy {
    // a return is only accepted for an entry that is OnHold
    OnHoldOnly,
    // a return is also accepted for an entry that is NotReturned
    OutstandingLoans,
}

impl Display for ReturnPolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReturnPolicy::OnHoldOnly => write!(f, "on_hold_only"),
            ReturnPolicy::OutstandingLoans => write!(f, "outstanding_loans"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Plain,
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LogFormat::Plain => write!(f, "plain"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

// Configuration abstracts config options for the lending desk
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub return_policy: ReturnPolicy,
    pub store: RepositoryStore,
    pub data_file: String,
    pub bind_address: String,
    pub log_format: LogFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            return_policy: ReturnPolicy::OnHoldOnly,
            store: RepositoryStore::Memory,
            data_file: "desk-catalog.json".to_string(),
            bind_address: "127.0.0.1:9000".to_string(),
            log_format: LogFormat::Plain,
        }
    }

    pub fn with_return_policy(mut self, return_policy: ReturnPolicy) -> Self {
        self.return_policy = return_policy;
        self
    }

    /// Loads the configuration from `DESK_*` environment variables, e.g.
    /// `DESK_BRANCH_ID`, `DESK_RETURN_POLICY=outstanding_loans` or `DESK_STORE=json_file`,
    /// falling back to the defaults of [`Configuration::new`].
    pub fn load() -> LibraryResult<Self> {
        Self::load_from(Environment::with_prefix("DESK").try_parsing(true))
    }

    fn load_from(env: Environment) -> LibraryResult<Self> {
        let defaults = Configuration::new(DEFAULT_BRANCH);
        let config = Config::builder()
            .set_default("branch_id", defaults.branch_id.as_str())?
            .set_default("return_policy", defaults.return_policy.to_string())?
            .set_default("store", defaults.store.to_string())?
            .set_default("data_file", defaults.data_file.as_str())?
            .set_default("bind_address", defaults.bind_address.as_str())?
            .set_default("log_format", defaults.log_format.to_string())?
            .add_source(env)
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
