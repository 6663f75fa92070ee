use core::fmt;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Which part of the splash screen a color paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Background,
    Text,
    Bar,
    BarBackground,
}

impl Role {
    /// In the order psplash-colors.h declares them.
    pub const ALL: [Role; 4] = [
        Role::Background,
        Role::Text,
        Role::Bar,
        Role::BarBackground,
    ];

    /// The psplash macro name. Also the name of the variable that overrides this color.
    pub const fn macro_name(self) -> &'static str {
        match self {
            Role::Background => "PSPLASH_BACKGROUND_COLOR",
            Role::Text => "PSPLASH_TEXT_COLOR",
            Role::Bar => "PSPLASH_BAR_COLOR",
            Role::BarBackground => "PSPLASH_BAR_BACKGROUND_COLOR",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Role::Background => "This is the overall background color",
            Role::Text => "This is the color of any text output",
            Role::Bar => "This is the color of the progress bar indicator",
            Role::BarBackground => "This is the color of the progress bar background",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Background => "background",
            Role::Text => "text",
            Role::Bar => "progress bar",
            Role::BarBackground => "progress bar background",
        };
        write!(f, "{}", s)
    }
}

/// The four colors of the boot splash.
///
/// Generic over the color type so a driver can [`convert`](Self::convert) the set into its
/// native pixel format once, e.g. `Rgb565` for SPI panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplashColors<C = Rgb888> {
    pub background: C,
    pub text: C,
    pub bar: C,
    pub bar_background: C,
}

impl SplashColors<Rgb888> {
    pub const DEFAULT: Self = Self {
        background: Rgb888::WHITE,
        text: Rgb888::BLACK,
        bar: Rgb888::BLACK,
        bar_background: Rgb888::WHITE,
    };

    pub const fn with_background(self, background: Rgb888) -> Self {
        Self { background, ..self }
    }

    pub const fn with_text(self, text: Rgb888) -> Self {
        Self { text, ..self }
    }

    pub const fn with_bar(self, bar: Rgb888) -> Self {
        Self { bar, ..self }
    }

    pub const fn with_bar_background(self, bar_background: Rgb888) -> Self {
        Self {
            bar_background,
            ..self
        }
    }
}

impl Default for SplashColors<Rgb888> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<C> SplashColors<C> {
    pub fn set(&mut self, role: Role, color: C) {
        match role {
            Role::Background => self.background = color,
            Role::Text => self.text = color,
            Role::Bar => self.bar = color,
            Role::BarBackground => self.bar_background = color,
        }
    }

    pub fn convert<T: From<C>>(self) -> SplashColors<T> {
        SplashColors {
            background: self.background.into(),
            text: self.text.into(),
            bar: self.bar.into(),
            bar_background: self.bar_background.into(),
        }
    }
}

impl<C: Copy> SplashColors<C> {
    pub fn get(&self, role: Role) -> C {
        match role {
            Role::Background => self.background,
            Role::Text => self.text,
            Role::Bar => self.bar,
            Role::BarBackground => self.bar_background,
        }
    }

    /// Every role with its color, in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, C)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb565;

    #[test]
    fn default_matches_stock_psplash_theme() {
        let colors = SplashColors::DEFAULT;
        assert_eq!(colors.background, Rgb888::new(255, 255, 255));
        assert_eq!(colors.text, Rgb888::new(0, 0, 0));
        assert_eq!(colors.bar, Rgb888::new(0, 0, 0));
        assert_eq!(colors.bar_background, Rgb888::new(255, 255, 255));
        assert_eq!(SplashColors::default(), colors);
    }

    #[test]
    fn set_then_get_touches_one_role() {
        let red = Rgb888::new(0xff, 0, 0);
        for role in Role::ALL {
            let mut colors = SplashColors::DEFAULT;
            colors.set(role, red);
            for other in Role::ALL {
                let expected = if other == role {
                    red
                } else {
                    SplashColors::DEFAULT.get(other)
                };
                assert_eq!(
                    colors.get(other),
                    expected,
                    "{} after setting {}",
                    other,
                    role
                );
            }
        }
    }

    #[test]
    fn iter_follows_header_order() {
        let roles: std::vec::Vec<Role> = SplashColors::DEFAULT
            .iter()
            .map(|(role, _)| role)
            .collect();
        assert_eq!(roles, Role::ALL);
    }

    #[test]
    fn converts_to_panel_format() {
        let colors = SplashColors::DEFAULT.convert::<Rgb565>();
        assert_eq!(colors.background, Rgb565::WHITE);
        assert_eq!(colors.text, Rgb565::BLACK);
        assert_eq!(colors.bar, Rgb565::BLACK);
        assert_eq!(colors.bar_background, Rgb565::WHITE);
    }
}
