//! # Configuration
//!
//! `Settings::load` merges, lowest precedence first: built-in defaults,
//! `config/default.toml`, `config/{RUN_ENV}.toml`, `APP__SECTION__KEY`
//! environment variables, then `SERVER_HOST`, `SERVER_PORT` and
//! `DATABASE_URL`. A `.env` file is read first when present.
//!
//! `database.url = "memory:"` runs the server on the in-process store.

mod settings;

pub use settings::*;
