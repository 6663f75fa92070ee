//! Reading and writing psplash-colors.h, for builds that still compile the C psplash
//! against a generated or vendor supplied header.
use crate::config::ConfigError;
use crate::scheme::SplashColors;
use crate::triplet::HexTriplet;
use core::fmt;
use embedded_graphics::pixelcolor::Rgb888;

pub const INCLUDE_GUARD: &str = "_HAVE_PSPLASH_COLORS_H";

pub fn write_header<W: fmt::Write>(colors: &SplashColors<Rgb888>, out: &mut W) -> fmt::Result {
    writeln!(out, "/*")?;
    writeln!(out, " * psplash-colors.h")?;
    writeln!(out, " *")?;
    writeln!(out, " * Overwrite default color scheme.")?;
    writeln!(out, " */")?;
    writeln!(out, "#ifndef {}", INCLUDE_GUARD)?;
    writeln!(out, "#define {}", INCLUDE_GUARD)?;
    for (role, color) in colors.iter() {
        writeln!(out)?;
        writeln!(out, "/* {} */", role.description())?;
        writeln!(out, "#define {} {}", role.macro_name(), HexTriplet(color))?;
    }
    writeln!(out)?;
    writeln!(out, "#endif")
}

/// Colors defined by a psplash-colors.h. Macros the header doesn't define keep their default
/// and every other line is ignored. If a macro is defined twice the first definition wins.
pub fn parse_header(header: &str) -> Result<SplashColors<Rgb888>, ConfigError> {
    SplashColors::from_lookup(|name| find_define(header, name))
}

fn find_define<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.lines().find_map(|line| {
        let directive = line.trim_start().strip_prefix('#')?.trim_start();
        let body = directive.strip_prefix("define")?;
        if !body.starts_with(char::is_whitespace) {
            return None;
        }
        let (macro_name, value) = body.trim_start().split_once(char::is_whitespace)?;
        if macro_name != name {
            return None;
        }
        // trailing comment, whichever style starts first
        let end = [value.find("/*"), value.find("//")]
            .into_iter()
            .flatten()
            .min();
        Some(end.map_or(value, |end| &value[..end]))
    })
}
