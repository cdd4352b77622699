//! The per-architecture boot profile record and its validation rules.
//!
//! A profile is a pure description of "how to boot architecture X for
//! testing". It exposes no behavior of its own; merging its configuration
//! fragment, resolving its image path and launching the emulator are the
//! consuming runner's job. Keeping the record inert lets the set of
//! supported architectures grow by adding independent data declarations
//! without touching orchestration code.

use crate::cmdline;
use crate::kconfig;
use thiserror::Error;

/// Everything one architecture needs to be exercised by the shared
/// test runner.
///
/// # Fields
/// * `architecture_id` - Canonical architecture name as known to the kernel build system.
/// * `kernel_config_fragment` - Minimal extra build options needed to boot with a usable console.
/// * `emulator_target` - The emulator's own identifier for the machine/CPU to emulate.
/// * `kernel_image_path` - Bootable image location, relative to the build output root.
/// * `boot_command_line` - Arguments passed to the booting kernel (names the console device).
/// * `extra_emulator_args` - Flags appended verbatim to the emulator invocation, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchBootProfile {
    pub architecture_id: String,
    pub kernel_config_fragment: String,
    pub emulator_target: String,
    pub kernel_image_path: String,
    pub boot_command_line: String,
    pub extra_emulator_args: Vec<String>,
}

impl ArchBootProfile {
    /// Create a profile with no extra emulator arguments.
    ///
    /// `extra_emulator_args` defaults to an explicit empty sequence so
    /// consumers never need a presence check; profiles that do carry
    /// extra flags are written as struct literals instead.
    pub fn new(
        architecture_id: &str,
        kernel_config_fragment: &str,
        emulator_target: &str,
        kernel_image_path: &str,
        boot_command_line: &str,
    ) -> ArchBootProfile {
        ArchBootProfile {
            architecture_id: architecture_id.to_string(),
            kernel_config_fragment: kernel_config_fragment.to_string(),
            emulator_target: emulator_target.to_string(),
            kernel_image_path: kernel_image_path.to_string(),
            boot_command_line: boot_command_line.to_string(),
            extra_emulator_args: Vec::new(),
        }
    }
}

/// Why a profile was rejected at load time.
///
/// Every variant names the offending architecture so a configuration-load
/// failure can be reported per profile without affecting the others.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("architecture '{architecture}': required field '{field}' is empty")]
    EmptyField {
        architecture: String,
        field: &'static str,
    },

    #[error("architecture '{architecture}': kernel_image_path '{path}' must be relative to the build output root")]
    AbsoluteImagePath { architecture: String, path: String },

    #[error("architecture '{architecture}': config fragment line {line} is not a valid option: '{text}'")]
    MalformedFragment {
        architecture: String,
        line: usize,
        text: String,
    },

    #[error("architecture '{architecture}': boot command line names console '{console}' but the config fragment binds no console to it")]
    UnboundConsole {
        architecture: String,
        console: String,
    },

    #[error("architecture '{architecture}' is declared by more than one profile")]
    DuplicateArchitecture { architecture: String },

    #[error("architecture '{architecture}': kernel image '{path}' not found under build root '{build_root}'")]
    MissingKernelImage {
        architecture: String,
        path: String,
        build_root: String,
    },
}

/// Check a profile against its authoring contract.
///
/// Rejects empty required fields, an absolute `kernel_image_path`, a
/// syntactically invalid config fragment, and a boot command line that
/// references a console device the fragment does not bind. Performs no
/// I/O; whether `kernel_image_path` exists is only checkable once a build
/// output root is known (see `registry::resolve_kernel_image`).
pub fn validate(profile: &ArchBootProfile) -> Result<(), ProfileError> {
    let arch = profile.architecture_id.as_str();

    let required: [(&'static str, &str); 4] = [
        ("architecture_id", arch),
        ("emulator_target", &profile.emulator_target),
        ("kernel_image_path", &profile.kernel_image_path),
        ("boot_command_line", &profile.boot_command_line),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(ProfileError::EmptyField {
                architecture: arch.to_string(),
                field,
            });
        }
    }

    // The image path is joined onto a build output root by the runner, so a
    // leading path-root marker is an authoring error.
    if profile.kernel_image_path.starts_with('/')
        || profile.kernel_image_path.starts_with('\\')
        || profile.kernel_image_path.contains(':')
    {
        return Err(ProfileError::AbsoluteImagePath {
            architecture: arch.to_string(),
            path: profile.kernel_image_path.clone(),
        });
    }

    let options = kconfig::parse_fragment(&profile.kernel_config_fragment).map_err(
        |(line, text)| ProfileError::MalformedFragment {
            architecture: arch.to_string(),
            line,
            text,
        },
    )?;

    let bindings = kconfig::console_bindings(&options);
    for console in cmdline::console_devices(&profile.boot_command_line) {
        let prefix = cmdline::driver_prefix(console);
        if !bindings.iter().any(|bound| *bound == prefix) {
            return Err(ProfileError::UnboundConsole {
                architecture: arch.to_string(),
                console: console.to_string(),
            });
        }
    }

    Ok(())
}
