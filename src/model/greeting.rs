use serde::Deserialize;
use std::io::{self, Write};

/// Text wrapped around a name: `prefix + name + suffix + "\n"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Greeting {
    pub prefix: String,
    pub suffix: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            prefix: "Hello, ".to_string(),
            suffix: "!".to_string(),
        }
    }
}

impl Greeting {
    /// Write the greeting line in a single call, then flush. The name is
    /// written byte for byte, so non-UTF-8 host strings pass through intact.
    pub fn write_to(&self, out: &mut dyn Write, name: &[u8]) -> io::Result<()> {
        let mut line = Vec::with_capacity(self.prefix.len() + name.len() + self.suffix.len() + 1);
        line.extend_from_slice(self.prefix.as_bytes());
        line.extend_from_slice(name);
        line.extend_from_slice(self.suffix.as_bytes());
        line.push(b'\n');

        out.write_all(&line)?;
        out.flush()
    }
}
