//! Command output: a JSON object under `--json`, a text block otherwise
//!
//! Every command builds one [`Output`]. Fields carry the machine-readable
//! payload (opcode rows, counts, config values); the message is what a
//! person reads on the terminal. Only one of the two is printed.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::CliError;

/// Result of one command, printed once at the end
pub struct Output {
    json_mode: bool,
    fields: Map<String, Value>,
    message: Option<String>,
    error: Option<serde_json::Error>,
}

impl Output {
    /// Start an empty result
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: Map::new(),
            message: None,
            error: None,
        }
    }

    /// Attach a payload field such as `opcodes`, `count` or `listen_addr`.
    ///
    /// Serialization is skipped in text mode. The first failure is kept and
    /// reported by [`Output::print`].
    pub fn field<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        if !self.json_mode || self.error.is_some() {
            return self;
        }
        match serde_json::to_value(value) {
            Ok(value) => {
                self.fields.insert(key.to_string(), value);
            }
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Set the terminal text
    pub fn message(mut self, text: &str) -> Self {
        self.message = Some(text.to_string());
        self
    }

    /// Text that [`Output::print`] would write, if any
    pub fn render(self) -> Result<Option<String>, CliError> {
        if !self.json_mode {
            return Ok(self.message);
        }
        if let Some(e) = self.error {
            return Err(e.into());
        }
        Ok(Some(serde_json::to_string_pretty(&self.fields)?))
    }

    /// Write the result to stdout
    pub fn print(self) -> Result<(), CliError> {
        if let Some(text) = self.render()? {
            println!("{text}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashvm_opcodes::opcodes;

    #[test]
    fn test_text_mode_prints_message_only() {
        let row = opcodes().get(0x93);
        let output = Output::new(false).field("opcode", row).message("OP_ADD (0x93)");
        assert_eq!(output.render().unwrap().as_deref(), Some("OP_ADD (0x93)"));
        assert_eq!(Output::new(false).render().unwrap(), None);
    }

    #[test]
    fn test_json_mode_serializes_rows() {
        let row = opcodes().get(0x93);
        let output = Output::new(true)
            .field("opcode", row)
            .field("count", &1usize)
            .field("aliases", &row.aliases)
            .message("ignored");
        let value: Value = serde_json::from_str(&output.render().unwrap().unwrap()).unwrap();
        assert_eq!(value["opcode"]["name"], "OP_ADD");
        assert_eq!(value["opcode"]["byte"], "0x93");
        assert_eq!(value["count"], 1);
        assert!(value["aliases"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_serialization_failure_is_reported() {
        use std::collections::HashMap;

        // Non-string map keys cannot become a JSON object
        let bad: HashMap<(u8, u8), u8> = [((1, 2), 3)].into();
        let output = Output::new(true).field("bad", &bad).field("count", &1usize);
        assert!(matches!(output.render(), Err(CliError::Json(_))));
    }
}
