//! Semicolon-delimited award datasets.
//!
//! The expected layout is a header row naming at least the `year`, `title`,
//! `studios`, `producers` and `winner` columns, followed by one record per
//! line:
//!
//! ```text
//! year;title;studios;producers;winner
//! 1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
//! 1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
//! ```

mod importer;
mod parser;
mod validator;

pub use importer::DelimitedImporter;
pub use parser::{DatasetRow, DelimitedParser};
pub use validator::{DatasetReport, DatasetValidator};
