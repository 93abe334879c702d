//! Sinkhole DNS Infrastructure Layer
pub mod dns;
