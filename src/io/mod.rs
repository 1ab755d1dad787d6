/*!
# IO utilities

Reading of WikiExtractor dumps ([reader]) and writing of extraction results ([writer]).
!*/
pub mod reader;
pub mod writer;
