use crate::scheme::{Role, SplashColors};
use crate::triplet::{parse_triplet, HexTriplet, ParseTripletError};
use core::fmt;
use embedded_graphics::pixelcolor::Rgb888;
use tracing::{event, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigError {
    pub role: Role,
    pub source: ParseTripletError,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} color in {}: {}",
            self.role,
            self.role.macro_name(),
            self.source
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

pub(crate) const fn configured(
    value: Option<&str>,
    default: Rgb888,
) -> Result<Rgb888, ParseTripletError> {
    match value {
        None => Ok(default),
        Some(value) => parse_triplet(value),
    }
}

/// Resolves the build-time override in environment variable `$name`. A malformed value stops
/// compilation with an error naming the variable.
macro_rules! build_color {
    ($name:literal, $default:expr) => {
        match $crate::config::configured(option_env!($name), $default) {
            Ok(color) => color,
            Err(_) => panic!(concat!(
                $name,
                " must be three comma separated bytes, e.g. 0xFF,0xFF,0xFF"
            )),
        }
    };
}
pub(crate) use build_color;

impl SplashColors<Rgb888> {
    /// Starts from [`SplashColors::DEFAULT`] and applies an override for every role that
    /// `lookup` has a value for. `lookup` is called with [`Role::macro_name`].
    pub fn from_lookup<F, S>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&'static str) -> Option<S>,
        S: AsRef<str>,
    {
        let mut colors = Self::DEFAULT;
        for role in Role::ALL {
            let Some(value) = lookup(role.macro_name()) else {
                continue;
            };
            let color =
                parse_triplet(value.as_ref()).map_err(|source| ConfigError { role, source })?;
            event!(
                Level::DEBUG,
                variable = role.macro_name(),
                color = %HexTriplet(color),
                "overriding splash color"
            );
            colors.set(role, color);
        }
        Ok(colors)
    }

    /// Reads overrides from the process environment, using the same variable names as the
    /// build-time overrides.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}
