//! Command implementations.

pub mod chunk;
pub mod run;
pub mod table;

pub use self::chunk::execute_chunk;
pub use self::run::execute_run;
pub use self::table::execute_table;
