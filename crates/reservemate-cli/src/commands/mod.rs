// crates/reservemate-cli/src/commands/mod.rs - Subcommand handlers
//
// MODULE ORGANIZATION:
// - shell: interactive read-run-print loop
// - exec: run one command line and exit with its status
// - list: print the stored reservations

pub mod exec;
pub mod list;
pub mod shell;
