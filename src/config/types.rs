// ABOUTME: Log level and deployment environment enums read from the process environment
// ABOUTME: Unknown values fall back to info level and the development environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Verbosity applied to the engine's own log targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only failures
    Error,
    /// Failures and recoverable problems such as fallback replies
    Warn,
    /// Session and gateway lifecycle
    #[default]
    Info,
    /// State transitions and refused submissions
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Directive name understood by `EnvFilter`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse case-insensitively; anything unrecognized is `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        [Self::Error, Self::Warn, Self::Debug, Self::Trace]
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.as_str()))
            .unwrap_or_default()
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Where the engine is running; production turns on location and span logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Environment variable consulted by [`Environment::from_env`]
    pub const ENV_VAR: &'static str = "ENVIRONMENT";

    /// Parse with the short aliases `prod` and `test`; anything else is development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Read `ENVIRONMENT`, defaulting to development when unset
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}
