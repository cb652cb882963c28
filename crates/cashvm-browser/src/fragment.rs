//! Location fragment codec
//!
//! A fragment is either `#<identifier>` or `#opcode=<identifier>`, where the
//! identifier is a canonical name or alias in any case.

use cashvm_opcodes::{OpcodeRow, OpcodeTable};

/// Parameter key accepted in `#opcode=<identifier>`
pub const OPCODE_PARAM: &str = "opcode";

/// Extract the opcode identifier from a raw fragment.
///
/// Returns `None` for an empty fragment, a malformed percent-encoding or a
/// blank identifier.
pub fn parse_fragment(hash: &str) -> Option<String> {
    let trimmed = hash.strip_prefix('#').unwrap_or(hash);
    if trimmed.is_empty() {
        return None;
    }

    let decoded = percent_decode(trimmed)?;
    let identifier = param_value(&decoded).unwrap_or(&decoded).trim();
    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}

/// Fragment for a canonical name, including the leading `#`
pub fn encode_fragment(name: &str) -> String {
    format!("#{}", urlencoding::encode(name))
}

/// Fragment for an optional selection; empty when nothing is selected
pub fn fragment_for(row: Option<&OpcodeRow>) -> String {
    row.map(|row| encode_fragment(&row.name)).unwrap_or_default()
}

/// Parse `hash` and resolve it against `table`
pub fn resolve_fragment<'t>(table: &'t OpcodeTable, hash: &str) -> Option<&'t OpcodeRow> {
    parse_fragment(hash).and_then(|identifier| table.resolve(&identifier))
}

// `opcode=<value>` with a case-insensitive key and a value free of `=`/`&`
fn param_value(decoded: &str) -> Option<&str> {
    let (key, value) = decoded.split_once('=')?;
    if key.eq_ignore_ascii_case(OPCODE_PARAM) && !value.is_empty() && !value.contains(['=', '&']) {
        Some(value)
    } else {
        None
    }
}

fn percent_decode(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let escape = bytes.get(index + 1..index + 3)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            index += 3;
        } else {
            index += 1;
        }
    }
    urlencoding::decode(raw).ok().map(|decoded| decoded.into_owned())
}
