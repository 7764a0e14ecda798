/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Scheme character classification
/// Returns: 0=not a scheme char, 1=letter (may start a scheme), 2=digit or `+`, `-`, `.`
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;
    table[b'.' as usize] = 2;

    table
};

/// Check if a byte may start a scheme
pub fn is_scheme_start_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] == 1
}

/// Check if a byte may appear after the first scheme character
pub fn is_scheme_byte(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] != 0
}

/// Check if a byte ends the authority section
pub fn is_authority_delimiter(b: u8) -> bool {
    matches!(b, b'/' | b'?' | b'#')
}
