/*!
 * Device-local durable storage.
 *
 * SQLite-backed persistence for the translation history fallback and the
 * session identity. Each device owns its own database file; nothing in here
 * is shared across devices.
 */

pub mod connection;
pub mod schema;

pub use connection::StorageConnection;
