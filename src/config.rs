use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::LoanPeriod;
use crate::domain::loan::{LOAN_PERIOD_DAYS, POPULAR_LOAN_PERIOD_DAYS};

/// 通常本の貸出日数を上書きする環境変数
pub const NORMAL_PERIOD_ENV: &str = "LENDING_NORMAL_PERIOD_DAYS";

/// 人気本の貸出日数を上書きする環境変数
pub const POPULAR_PERIOD_ENV: &str = "LENDING_POPULAR_PERIOD_DAYS";

/// 設定のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number of days, got {value:?}")]
    InvalidPeriod { name: &'static str, value: String },

    #[error("invalid lending policy document")]
    Json(#[from] serde_json::Error),
}

/// 貸出ポリシー
///
/// 既定値は通常本14日、人気本7日。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LendingPolicy {
    pub normal_period_days: u64,
    pub popular_period_days: u64,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            normal_period_days: LOAN_PERIOD_DAYS,
            popular_period_days: POPULAR_LOAN_PERIOD_DAYS,
        }
    }
}

impl LendingPolicy {
    /// 貸出期間に対応する日数
    pub fn days_for(&self, period: LoanPeriod) -> u64 {
        match period {
            LoanPeriod::Normal => self.normal_period_days,
            LoanPeriod::Popular => self.popular_period_days,
        }
    }

    /// 環境変数から読み込む。未設定の項目は既定値のまま。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// JSONドキュメントから読み込む。省略した項目は既定値のまま。
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let policy = Self {
            normal_period_days: read_days(&lookup, NORMAL_PERIOD_ENV, defaults.normal_period_days)?,
            popular_period_days: read_days(
                &lookup,
                POPULAR_PERIOD_ENV,
                defaults.popular_period_days,
            )?,
        };
        policy.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.normal_period_days == 0 {
            return Err(ConfigError::InvalidPeriod {
                name: "normal_period_days",
                value: "0".to_string(),
            });
        }
        if self.popular_period_days == 0 {
            return Err(ConfigError::InvalidPeriod {
                name: "popular_period_days",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}

fn read_days(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(days) if days > 0 => Ok(days),
            _ => Err(ConfigError::InvalidPeriod { name, value: raw }),
        },
    }
}
