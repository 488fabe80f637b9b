//! # jed-core
//!
//! Document engine for **jed**, a path-addressed JSON editor. The crate
//! parses JSON text into an owned [`Value`] tree, validates text against
//! the grammar, resolves and mutates nodes addressed by `/`-separated
//! paths, searches the tree by key or leaf content, and serializes back
//! to a canonical 2-space-indented layout.
//!
//! Strings are kept verbatim: escape sequences are neither decoded on
//! input nor re-applied on output. That is a documented limitation of
//! the format this tool reads and writes, not configurable behavior.
//!
//! ## Quick start
//!
//! ```rust
//! use jed_core::{parse_root, serialize, set};
//!
//! let mut root = parse_root(r#"{"server": {"port": 80}}"#).unwrap();
//! set(&mut root, "server/port", "8080").unwrap();
//! assert_eq!(
//!     serialize(&root),
//!     "{\n  \"server\": {\n    \"port\": 8080\n  }\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] — tokenizer with a restartable cursor and line/column tracking
//! - [`validator`] — grammar check over its own token cursor, boolean outcome
//! - [`parser`] — recursive-descent tree builder
//! - [`edit`] — path resolution and the set/create/delete/move engine
//! - [`search`] — key search and containment queries
//! - [`encoder`] — canonical serializer (printing and persistence)
//! - [`session`] — the open document as an explicit context value
//! - [`error`] — error taxonomy for every failure path

pub mod edit;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod search;
pub mod session;
pub mod types;
pub mod validator;

pub use edit::{create, delete, move_value, resolve, set};
pub use encoder::serialize;
pub use error::{JedError, Result};
pub use parser::parse_root;
pub use search::{contains, search_by_key};
pub use session::Session;
pub use types::Value;
pub use validator::validate;
