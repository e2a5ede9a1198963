//! User interface components for the advisor console.
//!
//! One page does the work: `home` renders the query input and the raw
//! JSON reply. `settings` edits the API endpoint.

mod chat_input;    // Query input component
pub mod home;      // Main chat page (public for routing)
pub mod settings;  // Endpoint configuration page (public for routing)
