//! `kznllm` - a Lua native module exporting a single `say_hello` function.
//!
//! ```lua
//! local kznllm = require("kznllm")
//! kznllm.say_hello("World") --> Hello, World!
//! ```
//!
//! Build the loadable module with
//! `cargo build --release --no-default-features --features module`.

pub mod error;
pub mod logging;
pub mod model;
pub mod plugin;

use anyhow::Context;
use mlua::{Lua, Table};

pub use error::{Error, Result};
pub use model::config::ModuleConfig;
pub use model::greeting::Greeting;
pub use plugin::{ExportTable, OutputSink};

/// Open the module with the embedded defaults, printing to stdout.
pub fn open(lua: &Lua) -> mlua::Result<Table> {
    let config = ModuleConfig::load()
        .context("loading embedded module defaults")
        .map_err(mlua::Error::external)?;

    open_with(lua, &config, OutputSink::stdout())
}

/// Open the module with an explicit config and output sink.
pub fn open_with(lua: &Lua, config: &ModuleConfig, sink: OutputSink) -> mlua::Result<Table> {
    logging::init(&config.logging)?;
    plugin::lua::register(lua, &ExportTable::builtin(), &config.greeting, &sink)
}

/// `luaopen_kznllm`, called by the host on `require "kznllm"`.
#[cfg(feature = "module")]
#[mlua::lua_module]
fn kznllm(lua: &Lua) -> mlua::Result<Table> {
    open(lua)
}
