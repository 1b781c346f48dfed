//! End-to-end tests for the pmb binary

mod cli_basic;
mod common;
mod replay;
