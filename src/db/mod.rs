//! Database connection pool and operations.

pub mod connection;
pub mod employee;
pub mod holiday;

pub use connection::{
    TableCounts, connect, ensure_schema, get_table_counts, get_version, test_connection, test_connection_string,
};
