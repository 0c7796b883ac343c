pub mod error;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use traits::{ImportContext, RecordImporter};

pub use sources::delimited::{
    DatasetReport, DatasetRow, DatasetValidator, DelimitedImporter, DelimitedParser,
};
