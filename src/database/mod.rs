//! Database layer: SQLite connection management and schema migrations.
//!
//! ```no_run
//! use i2p_browser::database::Database;
//!
//! let db = Database::open("browser.db").expect("failed to open database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
