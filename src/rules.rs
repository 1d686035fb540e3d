//! Built-in rule tables.

pub mod bulgarian;
