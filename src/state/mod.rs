/// State management module
///
/// This module handles all client-side state, including:
/// - Shared data structures and the add-product form (data.rs)
/// - The keyed request cache (query.rs)
/// - The product creation lifecycle (mutation.rs)
/// - Which overlays are open (selection.rs)
/// - The session that ties them together (session.rs)

pub mod data;
pub mod mutation;
pub mod query;
pub mod selection;
pub mod session;
