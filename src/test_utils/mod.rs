//! Shared test utilities for share-offer.

pub mod fixtures;

pub use fixtures::StateFixture;

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
    pub should_panic: bool,
}

/// Run table-driven tests, stopping at the first mismatch.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: std::fmt::Debug + Clone + std::panic::RefUnwindSafe,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E + std::panic::RefUnwindSafe,
{
    for case in cases {
        println!("[TEST] {} <- {:?}", case.name, case.input);

        let outcome = std::panic::catch_unwind(|| test_fn(case.input.clone()));

        match (outcome, case.should_panic) {
            (Err(_), true) => {}
            (Ok(_), true) => return Err(format!("Test '{}' expected panic", case.name)),
            (Err(_), false) => return Err(format!("Test '{}' panicked unexpectedly", case.name)),
            (Ok(actual), false) if actual != case.expected => {
                return Err(format!(
                    "Test '{}' failed: expected {:?}, got {:?}",
                    case.name, case.expected, actual
                ));
            }
            (Ok(_), false) => {}
        }
        println!("[TEST] PASSED: {}", case.name);
    }
    Ok(())
}
