//! Boot splash colors.
//!
//! The four colors are resolved when this crate is compiled. Each defaults to the stock psplash
//! theme and can be overridden by setting the matching `PSPLASH_*_COLOR` variable in the build
//! environment, using the psplash macro syntax (`0xFF,0xFF,0xFF`).
#![no_std]
#[cfg(any(test, feature = "std"))]
extern crate std;

use embedded_graphics::pixelcolor::Rgb888;

mod config;
pub mod header;
mod scheme;
mod triplet;

pub use config::ConfigError;
pub use scheme::{Role, SplashColors};
pub use triplet::{parse_triplet, HexTriplet, ParseTripletError};

/// Fill color of the whole splash surface.
pub const BACKGROUND_COLOR: Rgb888 = config::build_color!(
    "PSPLASH_BACKGROUND_COLOR",
    SplashColors::DEFAULT.background
);

/// Color of any status text.
pub const TEXT_COLOR: Rgb888 = config::build_color!(
    "PSPLASH_TEXT_COLOR",
    SplashColors::DEFAULT.text
);

/// Fill color of the progress indicator.
pub const BAR_COLOR: Rgb888 = config::build_color!(
    "PSPLASH_BAR_COLOR",
    SplashColors::DEFAULT.bar
);

/// Track behind the progress indicator.
pub const BAR_BACKGROUND_COLOR: Rgb888 = config::build_color!(
    "PSPLASH_BAR_BACKGROUND_COLOR",
    SplashColors::DEFAULT.bar_background
);

pub const SPLASH_COLORS: SplashColors = SplashColors {
    background: BACKGROUND_COLOR,
    text: TEXT_COLOR,
    bar: BAR_COLOR,
    bar_background: BAR_BACKGROUND_COLOR,
};
