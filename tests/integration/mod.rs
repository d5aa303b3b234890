//! Integration tests for assertgen

mod generation_run;
mod resolution;
mod resolution_properties;
