//! Byte-literal rendering
//!
//! Turns raw shader bytes into a block of `0xHH` literals that can be pasted
//! between the braces of an array initializer. Long shaders would otherwise
//! blow past the 4095-character string literal limit of C99/C17 compilers.

/// Number of byte literals emitted per line
pub const BYTES_PER_LINE: usize = 16;

/// Prefix written at the start of every line of the block
pub const INDENT: &str = "    ";

/// Separator between literals on the same line
const SEPARATOR: &str = ", ";

/// Length of one rendered literal (`0xHH`)
const LITERAL_LEN: usize = 4;

/// Error returned when a block cannot be decoded back into bytes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralParseError {
    /// Entry is not of the form `0xHH`
    #[error("entry {index} ({token:?}) is not a 0xHH byte literal")]
    InvalidToken { index: usize, token: String },
}

/// Render a single byte as `0x` followed by two lowercase hex digits.
pub fn byte_literal(byte: u8) -> String {
    format!("0x{byte:02x}")
}

/// Render a byte slice as an array-initializer block.
///
/// Each line holds up to [`BYTES_PER_LINE`] literals, starts with [`INDENT`]
/// and ends with a comma, including the final line. Lines are joined by `\n`
/// with no newline after the last one. Empty input yields an empty string.
pub fn format_byte_array(bytes: &[u8]) -> String {
    bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let literals: Vec<String> = chunk.iter().map(|&byte| byte_literal(byte)).collect();
            format!("{INDENT}{},", literals.join(SEPARATOR))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode a block produced by [`format_byte_array`] back into bytes.
///
/// Whitespace around entries is ignored and empty entries (such as the one
/// after a trailing comma) are skipped. Every other entry must be exactly
/// `0x` or `0X` followed by two hex digits.
pub fn parse_byte_array(block: &str) -> Result<Vec<u8>, LiteralParseError> {
    let mut bytes = Vec::with_capacity(block.len() / (LITERAL_LEN + SEPARATOR.len()));

    for (index, entry) in block
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
    {
        let invalid = || LiteralParseError::InvalidToken {
            index,
            token: entry.to_string(),
        };

        let digits = entry
            .strip_prefix("0x")
            .or_else(|| entry.strip_prefix("0X"))
            .ok_or_else(invalid)?;

        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        bytes.push(u8::from_str_radix(digits, 16).map_err(|_| invalid())?);
    }

    Ok(bytes)
}
