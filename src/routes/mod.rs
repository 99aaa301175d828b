/// Router Module Index
///
/// Organizes the shell's routing logic. The shell owns a single static route
/// table; every browser navigation is resolved against it and nothing else.

/// The static route table, its resolver, and the axum router built from it.
pub mod shell;
