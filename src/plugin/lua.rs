use mlua::{Lua, Table};

use crate::error::Error;
use crate::model::greeting::Greeting;
use crate::plugin::registry::ExportTable;
use crate::plugin::sink::OutputSink;

/// Build the Lua-side module table: one native function per export.
///
/// Argument checking is left to mlua's `FromLua` for strings, which accepts
/// strings and numbers (coerced the way `luaL_checkstring` does) and raises
/// `bad argument #1` for anything else, including a missing argument.
pub fn register(
    lua: &Lua,
    exports: &ExportTable,
    greeting: &Greeting,
    sink: &OutputSink,
) -> mlua::Result<Table> {
    let module = lua.create_table()?;

    for export in exports.iter().copied() {
        let greeting = greeting.clone();
        let sink = sink.clone();

        let function = lua.create_function(move |_, name: mlua::String| {
            let bytes = name.as_bytes();
            let name: &[u8] = &bytes;
            tracing::debug!(function = export.name, len = name.len(), "native call");

            sink.with(|out| export.call(&greeting, out, name))
                .map_err(|err| {
                    tracing::warn!("{}: output failed: {err}", export.name);
                    Error::Io(err)
                })?;

            Ok(())
        })?;

        module.set(export.name, function)?;
    }

    tracing::debug!(exports = ?exports.names(), "module table registered");
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Lua, crate::plugin::sink::Captured) {
        let lua = Lua::new();
        let (sink, captured) = OutputSink::capture();
        let module = register(&lua, &ExportTable::builtin(), &Greeting::default(), &sink).unwrap();
        lua.globals().set("m", module).unwrap();
        (lua, captured)
    }

    #[test]
    fn say_hello_prints_and_returns_nothing() {
        let (lua, captured) = setup();
        let count: usize = lua
            .load("return select('#', m.say_hello('World'))")
            .eval()
            .unwrap();

        assert_eq!(count, 0);
        assert_eq!(captured.output(), "Hello, World!\n");
    }

    #[test]
    fn missing_argument_is_bad_argument() {
        let (lua, captured) = setup();
        let err = lua.load("m.say_hello()").exec().unwrap_err();

        assert!(err.to_string().contains("bad argument #1"), "{err}");
        assert!(captured.is_empty());
    }

    #[test]
    fn write_failure_becomes_lua_error() {
        struct Broken;

        impl std::io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let lua = Lua::new();
        let sink = OutputSink::from_writer(Broken);
        let module = register(&lua, &ExportTable::builtin(), &Greeting::default(), &sink).unwrap();
        lua.globals().set("m", module).unwrap();

        let ok: bool = lua
            .load("return (pcall(m.say_hello, 'x'))")
            .eval()
            .unwrap();
        assert!(!ok);
    }
}
