//! In-memory filesystem for testing

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;

use super::{FileStat, FileSystem};

/// In-memory directory with a fixed listing order.
///
/// Every mutating call is recorded in order, and individual names can be
/// marked to fail so partial-failure paths can be exercised without a disk.
#[derive(Debug, Default)]
pub struct MockFs {
    files: RefCell<Vec<(String, FileStat)>>,
    failing: RefCell<HashSet<String>>,
    calls: RefCell<Vec<String>>,
}

impl MockFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock directory holding `names`, listed in the given order
    #[must_use]
    pub fn with_files(names: &[&str]) -> Self {
        let fs = Self::new();
        for name in names {
            fs.add_file(name, FileStat::default());
        }
        fs
    }

    pub fn add_file(&self, name: &str, stat: FileStat) {
        self.files.borrow_mut().push((name.to_string(), stat));
    }

    /// Make every rename or delete touching `name` fail. Failing `"."`
    /// makes the listing itself fail.
    pub fn fail_on(&self, name: &str) {
        self.failing.borrow_mut().insert(name.to_string());
    }

    /// Current names, in listing order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.files.borrow().iter().map(|(n, _)| n.clone()).collect()
    }

    /// Mutating calls made so far (`rename a -> b`, `remove x`)
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.files.borrow().iter().position(|(n, _)| n == name)
    }

    fn check_failure(&self, name: &str) -> io::Result<()> {
        if self.failing.borrow().contains(name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{name}: permission denied"),
            ));
        }
        Ok(())
    }

    fn not_found(name: &str) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, format!("{name}: not found"))
    }
}

impl FileSystem for MockFs {
    fn list(&self) -> io::Result<Vec<String>> {
        self.check_failure(".")?;
        Ok(self.names())
    }

    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        self.calls.borrow_mut().push(format!("rename {from} -> {to}"));
        self.check_failure(from)?;
        let slot = self.position(from).ok_or_else(|| Self::not_found(from))?;
        if from == to {
            return Ok(());
        }
        if self.position(to).is_some() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{to} already exists"),
            ));
        }
        self.files.borrow_mut()[slot].0 = to.to_string();
        Ok(())
    }

    fn remove(&self, name: &str) -> io::Result<()> {
        self.calls.borrow_mut().push(format!("remove {name}"));
        self.check_failure(name)?;
        let slot = self.position(name).ok_or_else(|| Self::not_found(name))?;
        self.files.borrow_mut().remove(slot);
        Ok(())
    }

    fn stat(&self, name: &str) -> io::Result<FileStat> {
        self.files
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, stat)| *stat)
            .ok_or_else(|| Self::not_found(name))
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
