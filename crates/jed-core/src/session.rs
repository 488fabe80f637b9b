//! Document session: the currently open file and its parsed tree.
//!
//! The session is an explicit context value threaded through the CLI
//! rather than global state. It exclusively owns the root; opening
//! another document builds a whole new session and the old tree is
//! dropped with it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::edit;
use crate::encoder::serialize;
use crate::error::Result;
use crate::parser::parse_root;
use crate::types::Value;

/// An open JSON document.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    /// Document text as loaded from disk (refreshed on save). Validation
    /// runs against this, not against the in-memory tree.
    text: String,
    root: Value,
}

impl Session {
    /// Open `path`, creating the file with `{}` content first if it does
    /// not exist. Fails if the file cannot be read or does not parse; no
    /// session is produced in that case.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, "{}")?;
        }
        let text = fs::read_to_string(&path)?;
        let root = parse_root(&text)?;
        Ok(Self { path, text, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document text as last loaded or saved.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    /// Persist the whole tree to the current file.
    pub fn save(&mut self) -> Result<()> {
        let rendered = serialize(&self.root);
        fs::write(&self.path, &rendered)?;
        self.text = rendered;
        Ok(())
    }

    /// Persist to the current file; with a subpath, only that subtree is
    /// written (the in-memory tree keeps its full shape).
    pub fn save_path(&mut self, subpath: Option<&str>) -> Result<()> {
        match subpath {
            None => self.save(),
            Some(p) => {
                let rendered = serialize(edit::resolve(&self.root, p)?);
                fs::write(&self.path, rendered)?;
                Ok(())
            }
        }
    }

    /// Persist to another file, optionally only the subtree at `subpath`.
    /// The session stays bound to its original path.
    pub fn save_as(&self, file: impl AsRef<Path>, subpath: Option<&str>) -> Result<()> {
        let node = match subpath {
            Some(p) => edit::resolve(&self.root, p)?,
            None => &self.root,
        };
        fs::write(file.as_ref(), serialize(node))?;
        Ok(())
    }
}
