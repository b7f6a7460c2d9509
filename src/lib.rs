// Palisade: fail-open content moderation gateway
//
// This is the library root. `scan` holds the dispatch and verdict logic,
// `oracle` the external classifier client, `web` the HTTP surface.

pub mod config;
pub mod oracle;
pub mod scan;
pub mod web;
