//! Heuristic syntax highlighting engine
//!
//! Text is split into tokens under a grammar's [`DelimiterPolicy`], each
//! non-whitespace token is wrapped in a [`Segment`] that exposes its
//! neighbourhood, and the grammar's ordered [`SyntaxRule`]s decide the
//! category. The first matching rule wins; no match means plain text.
//!
//! Grammars are immutable once built and may be shared across threads.

pub mod builtin;
pub mod chars;
pub mod context;
pub mod delimiters;
pub mod grammar;
pub mod highlighter;
pub mod registry;
pub mod rules;
pub mod segment;
pub mod tokenizer;
pub mod tokens;

pub use delimiters::DelimiterPolicy;
pub use grammar::{Grammar, Language};
pub use highlighter::{Highlight, Highlighter, Highlights, SpanKind};
pub use registry::GrammarRegistry;
pub use rules::SyntaxRule;
pub use segment::{Segment, TokenStream, TokenWindow};
pub use tokenizer::{Token, TokenKind};
pub use tokens::TokenType;
