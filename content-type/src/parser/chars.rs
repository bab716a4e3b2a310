//! Character classes from RFC 2045 section 5.1, as a lookup table over US-ASCII.

const TOKEN: u8 = 0b001;
const TYPE_TOKEN: u8 = 0b010;
const QTEXT: u8 = 0b100;

const SPACE: u8 = b' ';
const CR: u8 = b'\r';
const SPECIALS: &[u8] = b"()<>@,;:\\\".[]";
// tspecials = specials + these
const TSPECIALS: &[u8] = b"/?=";

const fn contains(set: &[u8], b: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == b {
            return true;
        }
        i += 1;
    }
    false
}

const fn is_ctl(b: u8) -> bool {
    b < 32 || b == 127
}

const fn build_classes() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;

    while i < table.len() {
        let b = i as u8;
        let mut class = 0;

        // token := CHAR - SPACE - CTLs - tspecials
        if b != SPACE && !is_ctl(b) && !contains(SPECIALS, b) && !contains(TSPECIALS, b) {
            class |= TOKEN | TYPE_TOKEN;
        }

        // type tokens allow dots, RFC 6838 trees need them
        if b == b'.' {
            class |= TYPE_TOKEN;
        }

        if b != b'"' && b != b'\\' && b != CR {
            class |= QTEXT;
        }

        table[i] = class;
        i += 1;
    }

    table
}

static CLASSES: [u8; 128] = build_classes();

fn has_class(c: char, class: u8) -> bool {
    c.is_ascii() && CLASSES[c as usize] & class != 0
}

/// Any US-ASCII character
pub fn is_char(c: char) -> bool {
    c.is_ascii()
}

/// Characters allowed in attributes and unquoted values
pub fn is_token_char(c: char) -> bool {
    has_class(c, TOKEN)
}

/// Characters allowed in subtypes and the tail of `x-`, `vnd.` and `prs.` types
pub fn is_type_token_char(c: char) -> bool {
    has_class(c, TYPE_TOKEN)
}

/// Characters allowed unescaped inside a quoted string
pub fn is_qtext(c: char) -> bool {
    has_class(c, QTEXT)
}
