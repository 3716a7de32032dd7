/*! Integration tests for Acorn.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - tree: Tests for the dot-notation containers (Tree, List, Value, paths)
 * - text: Tests for the string helpers
 * - num: Tests for the numeric range helpers
 * - registry: Tests for the keyed instance registry
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("acorn=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod text;
mod tree;
