//! Hook installation is process-wide; this binary holds a single test.

use image_transform_interop::InteropError;
use image_transform_interop::assertion::{
    AssertionFailure, assertion_hook, install_assertion_hook,
};
use image_transform_interop::interop_assert;
use std::panic;

fn hooked(failure: &AssertionFailure<'_>) -> ! {
    panic!("hooked: {}", failure.expression())
}

fn other(_: &AssertionFailure<'_>) -> ! {
    panic!("other")
}

#[test]
fn hook_is_installed_once_and_receives_failures() {
    assert!(assertion_hook().is_none());
    assert_eq!(install_assertion_hook(hooked), Ok(()));
    assert!(assertion_hook().is_some());

    assert_eq!(
        install_assertion_hook(other),
        Err(InteropError::AssertionHookAlreadyInstalled)
    );

    if cfg!(debug_assertions) {
        let result = panic::catch_unwind(|| {
            interop_assert!(2 < 1);
        });
        let payload = result.unwrap_err();
        let msg = payload.downcast_ref::<String>().cloned().unwrap_or_default();
        assert_eq!(msg, "hooked: 2 < 1");
    }
}
