//! Tests for the dot-notation tree containers.

mod insert;
mod merge;
mod values;
