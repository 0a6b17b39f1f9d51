//! # Physical Address Model
//!
//! Validation and normalization of physical (MAC) address strings.
//!
//! A 6-byte hardware address is accepted in three textual forms: 12 contiguous
//! hex digits, or 6 two-digit hex groups joined uniformly by `:` or `-`.
//! Mixed separators within one address are rejected.

/// Separator style used between the hex-digit pairs of a physical address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Separator {
    Colon,
    Dash,
    None,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Colon => ":",
            Separator::Dash => "-",
            Separator::None => "",
        }
    }
}

/// Checks whether `address` is a well-formed physical address.
///
/// Accepts `0123456789ab`, `01:23:45:67:89:ab` and `01-23-45-67-89-ab`
/// (case-insensitive). Anything else (wrong length, non-hex characters,
/// mixed separators, empty string) is invalid.
pub fn is_valid(address: &str) -> bool {
    let bytes = address.as_bytes();
    match bytes.len() {
        12 => bytes.iter().all(u8::is_ascii_hexdigit),
        17 => {
            let separator = bytes[2];
            if separator != b':' && separator != b'-' {
                return false;
            }
            bytes.chunks(3).all(|group| {
                group[0].is_ascii_hexdigit()
                    && group[1].is_ascii_hexdigit()
                    && group.get(2).is_none_or(|&b| b == separator)
            })
        }
        _ => false,
    }
}

/// Rewrites `address` to use `separator` between its hex-digit pairs.
///
/// Returns the empty string when `address` fails [`is_valid`]. The case of
/// the hex digits is preserved; callers comparing case-insensitively must
/// fold case themselves.
pub fn normalize(address: &str, separator: Separator) -> String {
    if !is_valid(address) {
        return String::new();
    }

    let digits: Vec<u8> = address
        .bytes()
        .filter(u8::is_ascii_hexdigit)
        .collect();

    digits
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).expect("hex digits are valid UTF-8"))
        .collect::<Vec<&str>>()
        .join(separator.as_str())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
