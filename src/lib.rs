//! Workspace root package.
//!
//! Carries workspace-level tooling (the rusty-hook pre-commit hook) and has
//! no code of its own; the library lives in `roadnet-lib` and the binary in
//! `roadnet-cli`.
