use image_transform_interop::mode::{ActiveEnvironment, Environment, KernelEnvironment};
use image_transform_interop::{BUILD_MODE, BuildMode};

#[test]
fn build_mode_matches_feature() {
    if cfg!(feature = "kernel") {
        assert_eq!(BUILD_MODE, BuildMode::Kernel);
        assert!(!ActiveEnvironment::HAS_STD);
    } else {
        assert_eq!(BUILD_MODE, BuildMode::Hosted);
        assert!(ActiveEnvironment::HAS_STD);
    }
    assert_eq!(ActiveEnvironment::MODE, BUILD_MODE);
}

#[test]
fn build_mode_is_exclusive() {
    assert_ne!(BUILD_MODE.is_kernel(), BUILD_MODE.is_hosted());
}

#[test]
fn build_mode_names() {
    assert_eq!(BuildMode::Kernel.to_string(), "kernel");
    assert_eq!(BuildMode::Hosted.to_string(), "hosted");
    assert_eq!(BuildMode::Kernel.name(), "kernel");
}

#[test]
fn kernel_environment_is_available_in_every_build() {
    assert_eq!(KernelEnvironment::MODE, BuildMode::Kernel);
    assert!(!KernelEnvironment::HAS_STD);
}
