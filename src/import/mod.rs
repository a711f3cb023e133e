//! CSV import pipeline
//!
//! [`decoder`] turns a document into header-keyed rows; [`normalizer`] turns
//! rows into transactions, counting the rows it has to drop.

pub mod decoder;
pub mod normalizer;

pub use decoder::{decode, DecodedDocument, RawRow, REQUIRED_COLUMNS};
pub use normalizer::{
    normalize, normalize_row, resolve_category, CategoryNames, NormalizedBatch, RejectReason,
    RowRejection,
};
