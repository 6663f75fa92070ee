use core::fmt;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

const COMPONENT_NAMES: [&str; 3] = ["red", "green", "blue"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTripletError {
    /// Fewer than three components, or an empty one between commas.
    MissingComponent { index: usize },
    /// A byte that is neither a digit of the component's radix, whitespace nor a separator.
    UnexpectedCharacter { index: usize, position: usize },
    /// The component does not fit in a byte.
    OutOfRange { index: usize },
    TooManyComponents,
}

impl fmt::Display for ParseTripletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTripletError::MissingComponent { index } => {
                write!(f, "missing {} component", component_name(*index))
            }
            ParseTripletError::UnexpectedCharacter { index, position } => write!(
                f,
                "unexpected character at byte {} while reading the {} component",
                position,
                component_name(*index)
            ),
            ParseTripletError::OutOfRange { index } => write!(
                f,
                "{} component is larger than {}",
                component_name(*index),
                u8::MAX
            ),
            ParseTripletError::TooManyComponents => {
                write!(f, "expected exactly three components")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseTripletError {}

fn component_name(index: usize) -> &'static str {
    COMPONENT_NAMES.get(index).copied().unwrap_or("extra")
}

/// Parses the body of a psplash color macro, e.g. `0xFF,0xFF,0xFF`.
///
/// Each of the three comma separated components is a C integer literal: decimal, `0x` prefixed
/// hex or `0` prefixed octal.
/// Whitespace around components is ignored. This is a `const fn` so build-time overrides are
/// rejected by the compiler rather than at boot.
pub const fn parse_triplet(s: &str) -> Result<Rgb888, ParseTripletError> {
    let bytes = s.as_bytes();
    let mut components = [0u8; 3];
    let mut pos = 0;
    let mut index = 0;

    while index < 3 {
        pos = skip_whitespace(bytes, pos);
        match parse_component(bytes, pos, index) {
            Ok((value, end)) => {
                components[index] = value;
                pos = skip_whitespace(bytes, end);
            }
            Err(e) => return Err(e),
        }

        if index < 2 {
            if pos >= bytes.len() {
                return Err(ParseTripletError::MissingComponent { index: index + 1 });
            }
            if bytes[pos] != b',' {
                return Err(ParseTripletError::UnexpectedCharacter {
                    index,
                    position: pos,
                });
            }
            pos += 1;
        }
        index += 1;
    }

    if pos < bytes.len() {
        if bytes[pos] == b',' {
            return Err(ParseTripletError::TooManyComponents);
        }
        return Err(ParseTripletError::UnexpectedCharacter {
            index: 2,
            position: pos,
        });
    }

    Ok(Rgb888::new(components[0], components[1], components[2]))
}

const fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

const fn parse_component(
    bytes: &[u8],
    start: usize,
    index: usize,
) -> Result<(u8, usize), ParseTripletError> {
    if start >= bytes.len() || bytes[start] == b',' {
        return Err(ParseTripletError::MissingComponent { index });
    }

    let is_hex = start + 1 < bytes.len()
        && bytes[start] == b'0'
        && (bytes[start + 1] == b'x' || bytes[start + 1] == b'X');
    // C integer literals: a leading 0 means octal
    let (radix, mut pos) = if is_hex {
        (16, start + 2)
    } else if bytes[start] == b'0' {
        (8, start)
    } else {
        (10, start)
    };
    let digits_start = pos;
    let mut value: u32 = 0;

    while pos < bytes.len() {
        let digit = match digit_value(bytes[pos], radix) {
            Some(digit) => digit,
            None => break,
        };
        value = value * radix + digit;
        if value > u8::MAX as u32 {
            return Err(ParseTripletError::OutOfRange { index });
        }
        pos += 1;
    }

    if pos == digits_start {
        return Err(ParseTripletError::UnexpectedCharacter {
            index,
            position: pos,
        });
    }

    Ok((value as u8, pos))
}

const fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => return None,
    };
    if (value as u32) < radix {
        Some(value as u32)
    } else {
        None
    }
}

/// Displays a color the way psplash-colors.h spells it: `0xRR,0xGG,0xBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexTriplet(pub Rgb888);

impl fmt::Display for HexTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02X},0x{:02X},0x{:02X}",
            self.0.r(),
            self.0.g(),
            self.0.b()
        )
    }
}
