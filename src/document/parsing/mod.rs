//! Text scanning utilities
//!
//! This module contains the line splitter and the `Q:`/`A:` scanner that
//! turn extracted text into records.

pub(crate) mod lines;
pub(crate) mod qa;
