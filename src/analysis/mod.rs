/// Domain layer - descriptor model, coordinate resolution and graph materialization
///
/// Everything here is pure logic; filesystem access goes through the
/// outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
