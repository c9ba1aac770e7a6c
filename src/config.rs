//! Session configuration.

use crate::error::{AtmError, Result};
use crate::splitter::SplitterKind;

/// PIN accepted by the ATM.
pub const DEFAULT_PIN: &str = "1234";

/// Settings for one ATM session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmConfig {
    /// PIN the entered value is compared against.
    pub pin: String,

    /// Strategy the cash slot uses to split withdrawals.
    pub strategy: SplitterKind,
}

impl Default for AtmConfig {
    fn default() -> Self {
        AtmConfig {
            pin: DEFAULT_PIN.to_string(),
            strategy: SplitterKind::default(),
        }
    }
}

impl AtmConfig {
    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = pin.into();
        self
    }

    pub fn with_strategy(mut self, strategy: SplitterKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds a config from command-line arguments, program name excluded.
    ///
    /// Accepts `--strategy <name>` and `--strategy=<name>`.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = AtmConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--strategy" {
                let value = args.next().ok_or_else(|| AtmError::MissingArgumentValue {
                    flag: arg.clone(),
                })?;
                config.strategy = value.parse()?;
            } else if let Some(value) = arg.strip_prefix("--strategy=") {
                config.strategy = value.parse()?;
            } else {
                return Err(AtmError::UnknownArgument { arg });
            }
        }

        Ok(config)
    }
}
