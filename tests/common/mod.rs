//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;
use unistore::todo::{Todo, TodoId, TodoList};

/// Writer whose contents stay readable after it has been moved into an
/// observer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output is utf-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader that fails on every call, for inputs that break mid-stream.
pub struct BrokenPipe;

impl io::Read for BrokenPipe {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
    }
}

/// Shared log of observer invocations.
pub type CallLog = Rc<RefCell<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn todo(id: u64, text: &str) -> Todo {
    Todo {
        id: TodoId::new(id),
        text: text.to_string(),
    }
}

pub fn todo_list(items: &[(u64, &str)]) -> TodoList {
    TodoList::from(
        items
            .iter()
            .map(|(id, text)| todo(*id, text))
            .collect::<Vec<_>>(),
    )
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
