//! Marker characters of the textual signature grammar.

pub const C_BOOLEAN: u8 = b'Z';
pub const C_BYTE: u8 = b'B';
pub const C_CHAR: u8 = b'C';
pub const C_DOUBLE: u8 = b'D';
pub const C_FLOAT: u8 = b'F';
pub const C_INT: u8 = b'I';
pub const C_LONG: u8 = b'J';
pub const C_SHORT: u8 = b'S';
pub const C_VOID: u8 = b'V';

pub const C_ARRAY: u8 = b'[';
pub const C_RESOLVED: u8 = b'L';
pub const C_UNRESOLVED: u8 = b'Q';
pub const C_TYPE_VARIABLE: u8 = b'T';
pub const C_SEMICOLON: u8 = b';';
pub const C_DOT: u8 = b'.';
pub const C_SLASH: u8 = b'/';
pub const C_DOLLAR: u8 = b'$';

pub const C_GENERIC_START: u8 = b'<';
pub const C_GENERIC_END: u8 = b'>';
pub const C_STAR: u8 = b'*';
pub const C_EXTENDS: u8 = b'+';
pub const C_SUPER: u8 = b'-';
pub const C_CAPTURE: u8 = b'!';
pub const C_INTERSECTION: u8 = b'|';
pub const C_COLON: u8 = b':';

pub const C_PARAM_START: u8 = b'(';
pub const C_PARAM_END: u8 = b')';

/// Characters that terminate an identifier inside a signature.
#[inline]
pub const fn is_delimiter(c: u8) -> bool {
    matches!(
        c,
        C_DOT
            | C_SLASH
            | C_SEMICOLON
            | C_GENERIC_START
            | C_GENERIC_END
            | C_PARAM_START
            | C_PARAM_END
            | C_ARRAY
            | b']'
            | C_STAR
            | C_EXTENDS
            | C_SUPER
            | C_CAPTURE
            | C_INTERSECTION
            | C_COLON
    )
}
