//! Tiny binary that runs the canonical episodes and prints deterministic
//! `key=value` lines for cross-process verification.
//!
//! Used by the cross-process determinism test to verify that episode
//! execution, trace digesting, and transcript rendering are identical
//! across different process environments (cwd, locale, env).
//!
//! Usage: `episode_fixture`

use lock_tests::fixtures::fixture_output;

fn main() {
    print!("{}", fixture_output());
}
