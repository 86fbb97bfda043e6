use std::fmt;

use crate::types::Entry;

impl Entry {
    /// Markdown-like text rendering used for terminal output
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "# {}", self.word)?;

        for definition in &self.definitions {
            write!(f, "\n\n## {}", definition.text)?;
            for example in &definition.examples {
                write!(f, "\n- {}", example)?;
            }
        }

        if !self.usages.is_empty() {
            f.write_str("\n\n---\n")?;
            for usage in &self.usages {
                write!(f, "\n- {}", usage)?;
            }
        }

        Ok(())
    }
}
