//! Binary that runs the canonical solve workload and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: `key=value` lines, see `lock_tests::canonical_run`.

fn main() {
    for line in lock_tests::canonical_run::canonical_lines() {
        println!("{line}");
    }
}
