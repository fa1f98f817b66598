use crate::{
    exit_status::ExitStatus,
    registry::{Registry, RegistryError},
    reporter::ConsoleReporter,
    test::TestCase,
};
use maybe_unwind::capture_panic_info;
use once_cell::sync::OnceCell;
use std::{panic, sync::Once};

static INSTALL_PANIC_HOOK: Once = Once::new();

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Route the panic messages raised inside test functions to the runner.
pub(crate) fn install_panic_hook() {
    INSTALL_PANIC_HOOK.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !capture_panic_info(info) {
                prev_hook(info);
            }
        }));
    });
}

/// Install the process-wide registry used by [`run_all`].
///
/// The registry can be installed only once.
pub fn install(registry: Registry) -> Result<(), RegistryError> {
    REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)
}

/// Run every test case of the installed registry and print the results
/// to the console.
///
/// Return `true` when all of them have passed. Nothing is run if no
/// registry has been installed.
pub fn run_all() -> bool {
    let registry = match REGISTRY.get() {
        Some(registry) => registry,
        None => {
            log::warn!("no test registry is installed");
            return true;
        }
    };

    let reporter = ConsoleReporter::new();
    registry.run(&reporter).is_passed()
}

/// The entry point generated by `test_main!()`.
#[doc(hidden)] // private API
pub fn test_main(tests: &[&TestCase]) {
    let status = match install_test_cases(tests) {
        Ok(()) => ExitStatus::from_passed(run_all()),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitStatus::FAILED
        }
    };
    status.exit()
}

fn install_test_cases(tests: &[&TestCase]) -> Result<(), RegistryError> {
    let mut registry = Registry::new();
    for test in tests {
        registry.add_test_case(test)?;
    }
    install(registry)
}
