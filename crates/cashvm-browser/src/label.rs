//! Display labels and page titles

use cashvm_opcodes::OpcodeRow;

/// Title shown when nothing is selected
pub const BASE_TITLE: &str = "CashVM Opcodes | Bitcoin Cash";

// Words followed by a space in cell labels when another word follows
const WORD_BREAKS: [&str; 11] = [
    "check", "sig", "tx", "utxo", "input", "output", "outpoint", "token", "reverse", "locktime",
    "sequence",
];

/// Grid cell label for a canonical name.
///
/// `OP_` is dropped except for the small-number pushes `OP_0`..`OP_16`,
/// and compound names are split: `OP_CHECKSIGVERIFY` -> `CHECK SIG VERIFY`.
pub fn format_opcode_label(name: &str) -> String {
    let base = if keeps_prefix(name) {
        name
    } else {
        name.strip_prefix("OP_").unwrap_or(name)
    };

    let lower = base.to_ascii_lowercase();
    let mut label = String::with_capacity(base.len() + 4);
    let mut index = 0;

    'scan: while index < base.len() {
        for word in WORD_BREAKS {
            let end = index + word.len();
            if lower[index..].starts_with(word)
                && base[end..].starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
            {
                label.push_str(&base[index..end]);
                label.push(' ');
                index = end;
                continue 'scan;
            }
        }
        let next = base[index..].chars().next().map_or(1, char::len_utf8);
        label.push_str(&base[index..index + next]);
        index += next;
    }

    label.to_uppercase()
}

/// Document title for the current selection
pub fn page_title(selected: Option<&OpcodeRow>) -> String {
    match selected {
        Some(row) => format!("{} | {BASE_TITLE}", row.name),
        None => BASE_TITLE.to_string(),
    }
}

fn keeps_prefix(name: &str) -> bool {
    name.strip_prefix("OP_")
        .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
        .filter(|rest| rest.len() == 1 || !rest.starts_with('0'))
        .and_then(|rest| rest.parse::<u8>().ok())
        .is_some_and(|number| number <= 16)
}
