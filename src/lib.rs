//! Batch join of dengue case counts against rainfall measurements, keyed by
//! Brazilian state and calendar month. Two parse→key→aggregate pipelines run
//! to completion, converge at an inner join, and land in one `;`-delimited
//! file with a fixed header.

pub mod aggregate;
pub mod config;
pub mod dataflow;
pub mod error;
pub mod job;
pub mod join;
pub mod model;
pub mod output;
pub mod parse;
pub mod source;
pub mod transform;
