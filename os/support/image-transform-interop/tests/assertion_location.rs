//! Panics from failed assertions point at the assertion site. The panic hook
//! is process-wide, so this binary holds a single test.

use image_transform_interop::assertion::AssertionFailure;
use image_transform_interop::interop_assert;
use image_transform_interop::mode::{ActiveEnvironment, Environment, KernelEnvironment};
use std::panic;
use std::sync::Mutex;

static PANIC_AT: Mutex<Option<(String, u32)>> = Mutex::new(None);

fn last_panic_location() -> Option<(String, u32)> {
    PANIC_AT.lock().unwrap().take()
}

#[test]
fn panic_location_is_the_assertion_site() {
    panic::set_hook(Box::new(|info| {
        if let Some(location) = info.location() {
            *PANIC_AT.lock().unwrap() = Some((location.file().to_string(), location.line()));
        }
    }));

    if cfg!(debug_assertions) {
        let line = line!() + 1;
        let result = panic::catch_unwind(|| interop_assert!(1 > 2, "never"));
        assert!(result.is_err());
        let (file, at) = last_panic_location().unwrap();
        assert!(file.ends_with("assertion_location.rs"), "{file}");
        assert_eq!(at, line);
    }

    let location = panic::Location::caller();
    let line = line!() + 2;
    let result: Result<(), _> = panic::catch_unwind(|| {
        KernelEnvironment::assertion_failed(&AssertionFailure::new("rows > 0", None, location))
    });
    assert!(result.is_err());
    let (file, at) = last_panic_location().unwrap();
    assert!(file.ends_with("assertion_location.rs"), "{file}");
    assert_eq!(at, line);

    let line = line!() + 2;
    let result: Result<(), _> = panic::catch_unwind(|| {
        ActiveEnvironment::assertion_failed(&AssertionFailure::new("cols > 0", None, location))
    });
    assert!(result.is_err());
    assert_eq!(last_panic_location().map(|(_, at)| at), Some(line));

    let _ = panic::take_hook();
}
