//! `combo_core` expands a parameterized multi-document template into every
//! combination of a set of named value lists, producing a deduplicated list
//! of rendered documents.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Parameter domain (name → [values])
//!   → Combination stream (mixed-radix counter, eager or lazy)
//!   → Assignment₁, Assignment₂, …
//!   → Template engine (split on `---`, whole-token substitution, dedup)
//!   → Evaluation driver (pulls assignments, observes cancellation)
//!   → Distinct rendered documents
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `combo.toml` (generation mode
//!   and `[[arguments]]` lists).
//!
//! ## Key Types
//!
//! - [`ParameterDomain`]: The validated, ordered set of parameters and
//!   their candidate values.
//! - [`Assignment`]: One value chosen for every parameter.
//! - [`CombinationStream`]: Pull-based cursor over every assignment.
//! - [`TemplateEngine`]: Splits a template into document units, applies
//!   assignments and accumulates distinct results.
//! - [`CancellationToken`]: Cooperative cancellation between assignments.
//!
//! ## Quick Start
//!
//! ```rust
//! use combo_core::CancellationToken;
//! use combo_core::GenerationMode;
//! use combo_core::ParameterDomain;
//! use combo_core::evaluate;
//!
//! let domain = ParameterDomain::new([
//! 	("FIRSTNAME", vec!["John", "Luke"]),
//! 	("LASTNAME", vec!["Snow", "Skywalker"]),
//! ])
//! .unwrap();
//!
//! let documents = evaluate(
//! 	"FIRSTNAME: LASTNAME",
//! 	domain,
//! 	GenerationMode::Lazy,
//! 	&CancellationToken::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(documents.len(), 4);
//! assert!(documents.contains(&"Luke: Skywalker".to_string()));
//! ```

pub use cancel::*;
pub use config::*;
pub use domain::*;
pub use error::*;
pub use evaluate::*;
pub use stream::*;
pub use template::*;

mod cancel;
pub mod config;
mod domain;
#[allow(unused_assignments)]
mod error;
mod evaluate;
pub(crate) mod lexer;
pub(crate) mod odometer;
mod stream;
mod template;

#[cfg(test)]
mod __fixtures;
