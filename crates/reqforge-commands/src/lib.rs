//! Reqforge Commands
//!
//! Command-token annotation and command sequencing inference layered over
//! finished requirement units.
//!
//! # Overview
//!
//! Two passes run over the raw chunk texts (never the requirement
//! descriptions, which are model output):
//!
//! - **Annotation**: each requirement receives the distinct command tokens
//!   found in the chunk at its position.
//! - **Compatibility inference**: adjacent token pairs in each chunk become
//!   directed `src → dst` observations, classified by the keywords found
//!   between them. Negative evidence is sticky.
//!
//! The inferred matrix is attached to one target requirement and can later
//! be rendered as an upper-triangular sequencing table.
//!
//! # Example
//!
//! ```
//! use reqforge_commands::{infer_compatibility, CommandMatcher, SequenceKeywords};
//! use reqforge_domain::{Chunk, CompatibilityState};
//!
//! let matcher = CommandMatcher::new(&[r"\bCMD_[A-Z0-9]+\b"])?;
//! let chunks = vec![Chunk {
//!     text: "CMD_ACT -> CMD_RD. CMD_PRE must not follow CMD_RD.".to_string(),
//!     ..Default::default()
//! }];
//!
//! let matrix = infer_compatibility(&chunks, &matcher, None, &SequenceKeywords::default());
//! assert_eq!(matrix.get("CMD_ACT", "CMD_RD"), Some(CompatibilityState::Allowed));
//! assert_eq!(matrix.get("CMD_PRE", "CMD_RD"), Some(CompatibilityState::Forbidden));
//! # Ok::<(), reqforge_commands::CommandError>(())
//! ```

#![warn(missing_docs)]

mod annotate;
mod compatibility;
mod config;
mod error;
mod matcher;
mod table;

pub use annotate::annotate_requirements;
pub use compatibility::{attach_compatibility, infer_compatibility, SequenceKeywords};
pub use config::{CommandConfig, DEFAULT_COMMAND_PATTERN};
pub use error::{CommandError, Result};
pub use matcher::{find_commands_in_text, CommandMatcher, TokenMatch};
pub use table::{
    build_sequential_compatibility_table, extract_command_names, extract_commands_from_catalog,
    extract_compatibility_mapping, render_compatibility_csv, write_compatibility_csv,
};
