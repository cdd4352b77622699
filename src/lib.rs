//! Per-architecture boot profiles for running kernel unit-test images
//! under a hardware emulator.
//!
//! The crate supplies inert data only: each [`profile::ArchBootProfile`]
//! describes how one architecture is booted for testing (emulator machine
//! target, kernel configuration fragment enabling a serial console,
//! kernel image location inside the build tree, boot command line, extra
//! emulator flags). Process management, kernel builds and output parsing
//! belong to the external test runner that loads these records through
//! [`registry::ProfileRegistry`].

pub mod archs;
pub mod cmdline;
pub mod kconfig;
pub mod profile;
pub mod registry;

pub use profile::{ArchBootProfile, ProfileError};
pub use registry::ProfileRegistry;
