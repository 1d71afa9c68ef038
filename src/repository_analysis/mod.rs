/// Repository analysis domain - pure logic with no I/O
///
/// Everything below works on plain values and the `RandomSource` port, so it
/// can be exercised without network access.
pub mod domain;
pub mod policies;
pub mod services;
