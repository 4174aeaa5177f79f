//! Rendering subscribers.
//!
//! The store knows nothing about output. These helpers build observers that
//! print each committed state, in the configured [`OutputFormat`].

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::counter::Count;
use crate::todo::TodoList;

/// Plain-text presentation of a state.
pub trait View {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl View for Count {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl View for TodoList {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "todos ({}):", self.len())?;
        for todo in self {
            writeln!(out, "  #{} {}", todo.id, todo.text)?;
        }
        Ok(())
    }
}

/// Write one snapshot of `state`.
pub fn render<S>(state: &S, format: OutputFormat, out: &mut dyn Write) -> io::Result<()>
where
    S: View + Serialize,
{
    match format {
        OutputFormat::Text => state.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, state).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Build an observer that renders every state it is handed to `out`.
///
/// Observers cannot return errors, so write failures are logged.
pub fn observer<S, W>(format: OutputFormat, mut out: W) -> impl FnMut(&S)
where
    S: View + Serialize,
    W: Write,
{
    move |state: &S| {
        if let Err(err) = render(state, format, &mut out) {
            tracing::warn!(error = %err, "Failed to render state");
        }
    }
}
