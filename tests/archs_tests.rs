use ArchBootProfiles::archs::{alpha, builtin_profiles};
use ArchBootProfiles::cmdline::{console_devices, driver_prefix};
use ArchBootProfiles::kconfig::{console_bindings, parse_fragment};
use ArchBootProfiles::profile::validate;
use std::collections::HashSet;

#[test]
fn test_every_builtin_profile_validates() {
    for profile in builtin_profiles() {
        let result = validate(&profile);
        assert!(
            result.is_ok(),
            "profile '{}' failed validation: {:?}",
            profile.architecture_id,
            result
        );
    }
}

#[test]
fn test_required_fields_are_non_empty() {
    for profile in builtin_profiles() {
        assert!(!profile.architecture_id.is_empty());
        assert!(!profile.emulator_target.is_empty());
        assert!(!profile.kernel_image_path.is_empty());
        assert!(!profile.boot_command_line.is_empty());
    }
}

#[test]
fn test_image_paths_are_relative_to_build_root() {
    for profile in builtin_profiles() {
        assert!(
            !profile.kernel_image_path.starts_with('/'),
            "profile '{}' has an absolute image path",
            profile.architecture_id
        );
    }
}

#[test]
fn test_architecture_ids_are_pairwise_distinct() {
    let profiles = builtin_profiles();
    let ids: HashSet<String> = profiles.iter().map(|p| p.architecture_id.clone()).collect();
    assert_eq!(ids.len(), profiles.len());
}

#[test]
fn test_console_devices_are_bound_by_each_fragment() {
    for profile in builtin_profiles() {
        let options = parse_fragment(&profile.kernel_config_fragment).unwrap();
        let bindings = console_bindings(&options);
        for console in console_devices(&profile.boot_command_line) {
            assert!(
                bindings.iter().any(|bound| *bound == driver_prefix(console)),
                "profile '{}' names console '{}' without a binding",
                profile.architecture_id,
                console
            );
        }
    }
}

#[test]
fn test_alpha_profile_matches_expected_record() {
    let profile = alpha::profile();
    assert_eq!(profile.architecture_id, "alpha");
    assert_eq!(profile.emulator_target, "alpha");
    assert_eq!(profile.kernel_image_path, "arch/alpha/boot/vmkernel");
    assert_eq!(profile.boot_command_line, "console=ttyS0");
    assert!(profile.extra_emulator_args.is_empty());

    let options = parse_fragment(&profile.kernel_config_fragment).unwrap();
    let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["CONFIG_SERIAL_8250", "CONFIG_SERIAL_8250_CONSOLE"]);
}

#[test]
fn test_console_device_extraction() {
    assert_eq!(console_devices("console=ttyS0"), vec!["ttyS0"]);
    assert_eq!(console_devices("console=ttySC1 earlycon"), vec!["ttySC1"]);
    assert_eq!(console_devices("console=ttyS0,115200 console=hvc0"), vec!["ttyS0", "hvc0"]);
    assert!(console_devices("root=/dev/ram quiet").is_empty());
}

#[test]
fn test_driver_prefix_strips_unit_number() {
    assert_eq!(driver_prefix("ttyS0"), "ttyS");
    assert_eq!(driver_prefix("ttysclp0"), "ttysclp");
    assert_eq!(driver_prefix("hvc0"), "hvc");
    assert_eq!(driver_prefix("ttyAMA10"), "ttyAMA");
}
