//! Path management for the budget tracker
//!
//! Provides XDG-compliant path resolution for the ledger file and chart output.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-cli` or `~/.config/budget-cli`
//! 3. Windows: `%APPDATA%\budget-cli`

use std::path::PathBuf;

use crate::error::BudgetError;

/// Manages all paths used by the budget tracker
///
/// Injected into the store at construction; there is no process-wide
/// notion of where the ledger lives.
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all budget tracker data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// Path resolution:
    /// 1. `BUDGET_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/budget-cli` or `~/.config/budget-cli`
    /// 3. Windows: `%APPDATA%\budget-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var("BUDGET_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/budget-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the ledger file (budget.csv)
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("budget.csv")
    }

    /// Get the charts directory (~/.config/budget-cli/charts/)
    pub fn charts_dir(&self) -> PathBuf {
        self.base_dir.join("charts")
    }

    /// Get the path to the expense chart artifact
    pub fn expense_chart_file(&self) -> PathBuf {
        self.charts_dir().join("expense_chart.svg")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("budget-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.ledger_file(), temp_dir.path().join("budget.csv"));
        assert_eq!(paths.charts_dir(), temp_dir.path().join("charts"));
        assert_eq!(
            paths.expense_chart_file(),
            temp_dir.path().join("charts").join("expense_chart.svg")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
