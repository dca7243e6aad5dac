//! Assembly catalog: static lookup from RefSeq chromosome accessions to
//! genome-build tags.
//!
//! The catalog is read-only, process-lifetime reference data. The default
//! contents are embedded at compile time from `catalogs/grch_assemblies.json`
//! and cover the GRCh37 (`b37`) and GRCh38 (`b38`) chromosome sequences.

pub mod store;

pub use store::{AssemblyCatalog, REQUIRED_BUILD};
