//! Workspace root package.
//!
//! Holds no code of its own; it exists so `rusty-hook` installs the
//! pre-commit checks declared in the root `Cargo.toml`. The library lives in
//! `crates/roadroute-lib` and the command-line tool in `crates/roadroute-cli`.
