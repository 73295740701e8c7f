use std::fmt;
use std::io::{self, Write};

use crate::model::greeting::Greeting;

/// Native handler behind an exported name. Receives the bytes of the single
/// string argument after the host has validated it.
pub type Handler = fn(&Greeting, &mut dyn Write, &[u8]) -> io::Result<()>;

#[derive(Clone, Copy)]
pub struct Export {
    pub name: &'static str,
    handler: Handler,
}

impl Export {
    pub const fn new(name: &'static str, handler: Handler) -> Self {
        Self { name, handler }
    }

    pub fn call(&self, greeting: &Greeting, out: &mut dyn Write, arg: &[u8]) -> io::Result<()> {
        (self.handler)(greeting, out, arg)
    }
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[export {}]", self.name)
    }
}

/// Name → handler mapping handed to the host once at load time.
#[derive(Debug, Clone)]
pub struct ExportTable {
    exports: Vec<Export>,
}

const BUILTIN: &[Export] = &[Export::new("say_hello", say_hello)];

fn say_hello(greeting: &Greeting, out: &mut dyn Write, name: &[u8]) -> io::Result<()> {
    greeting.write_to(out, name)
}

impl ExportTable {
    pub fn builtin() -> Self {
        Self {
            exports: BUILTIN.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.exports.iter().map(|export| export.name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Export> {
        self.exports.iter().find(|export| export.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Export> {
        self.exports.iter()
    }
}
