//! Configuration management
//!
//! Policy for newly opened accounts, read from an optional `settings.json`
//! in the ledger directory:
//! ```json
//! {
//!   "accounts": {
//!     "branchCode": "0001",
//!     "withdrawalLimit": "500.00",
//!     "dailyWithdrawalLimit": 3
//!   }
//! }
//! ```
//! Only configuration lives on disk. Ledger state is never persisted.

use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::Error;
use crate::domain::{WithdrawalLimits, DEFAULT_BRANCH};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    accounts: AccountSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountSettings {
    #[serde(default)]
    branch_code: Option<String>,
    #[serde(default)]
    withdrawal_limit: Option<Decimal>,
    #[serde(default)]
    daily_withdrawal_limit: Option<u32>,
}

/// Ledger configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Branch code given to new accounts
    pub branch_code: String,
    /// Limits applied to every new current account
    pub withdrawal_limits: WithdrawalLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_code: DEFAULT_BRANCH.to_string(),
            withdrawal_limits: WithdrawalLimits::default(),
        }
    }
}

impl Config {
    /// Load config from the ledger directory
    ///
    /// A missing or unreadable settings file yields the defaults. The branch
    /// code can be overridden with `LEDGER_BRANCH_CODE`.
    pub fn load(ledger_dir: &Path) -> Result<Self> {
        let settings_path = ledger_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let defaults = Self::default();
        let branch_code = match std::env::var("LEDGER_BRANCH_CODE").ok() {
            Some(code) if !code.trim().is_empty() => code.trim().to_string(),
            _ => raw.accounts.branch_code.unwrap_or(defaults.branch_code),
        };

        let config = Self {
            branch_code,
            withdrawal_limits: WithdrawalLimits::new(
                raw.accounts
                    .withdrawal_limit
                    .unwrap_or(defaults.withdrawal_limits.per_withdrawal),
                raw.accounts
                    .daily_withdrawal_limit
                    .unwrap_or(defaults.withdrawal_limits.daily_withdrawals),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to the ledger directory
    pub fn save(&self, ledger_dir: &Path) -> Result<()> {
        let settings = SettingsFile {
            accounts: AccountSettings {
                branch_code: Some(self.branch_code.clone()),
                withdrawal_limit: Some(self.withdrawal_limits.per_withdrawal),
                daily_withdrawal_limit: Some(self.withdrawal_limits.daily_withdrawals),
            },
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(ledger_dir.join("settings.json"), content)?;
        Ok(())
    }

    /// Limits must be positive and the branch code non-empty
    pub fn validate(&self) -> std::result::Result<(), Error> {
        if self.branch_code.trim().is_empty() {
            return Err(Error::Config("branch code cannot be empty".to_string()));
        }
        if self.withdrawal_limits.per_withdrawal <= Decimal::ZERO {
            return Err(Error::Config("withdrawal limit must be positive".to_string()));
        }
        if self.withdrawal_limits.daily_withdrawals == 0 {
            return Err(Error::Config(
                "daily withdrawal limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.withdrawal_limits.per_withdrawal, Decimal::new(500, 0));
        assert_eq!(config.withdrawal_limits.daily_withdrawals, 3);
    }

    #[test]
    fn test_settings_file_overrides_limits() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "accounts": { "withdrawalLimit": "250.50", "dailyWithdrawalLimit": 5 } }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.withdrawal_limits.per_withdrawal, Decimal::new(25050, 2));
        assert_eq!(config.withdrawal_limits.daily_withdrawals, 5);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.withdrawal_limits, WithdrawalLimits::default());
    }

    #[test]
    fn test_non_positive_limits_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "accounts": { "dailyWithdrawalLimit": 0 } }"#,
        )
        .unwrap();

        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_save_round_trips_limits() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            branch_code: "0042".to_string(),
            withdrawal_limits: WithdrawalLimits::new(Decimal::new(1000, 0), 4),
        };
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.withdrawal_limits, config.withdrawal_limits);
    }
}
