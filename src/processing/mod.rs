//! Post-processing of extraction results.
//!
//! - [dedup] removes knowledgebase records already present in another knowledgebase,
//! - [resegment] re-derives first sentences from a paragraphs file.
pub mod dedup;
pub mod resegment;
