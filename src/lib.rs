//! glint: grammar-driven source code highlighting
//!
//! ```
//! use glint::output::HtmlOutputFormat;
//! use glint::syntax::{Highlighter, Language};
//!
//! let grammar = Language::JavaScript.grammar();
//! let html = Highlighter::new(&grammar).render("let x = 1;", &HtmlOutputFormat::default());
//! assert!(html.starts_with("<span class=\"glint-keyword\">let</span>"));
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod syntax;

pub use config::Config;
pub use error::{GlintError, Result};
