//! Boot profile for 64-bit PowerPC on an emulated pSeries machine.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_PPC64=y
CONFIG_SERIAL_8250=y
CONFIG_SERIAL_8250_CONSOLE=y
CONFIG_HVC_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile {
        architecture_id: "powerpc".to_string(),
        kernel_config_fragment: KCONFIG.to_string(),
        emulator_target: "ppc64".to_string(),
        kernel_image_path: "vmkernel".to_string(),
        boot_command_line: "console=ttyS0".to_string(),
        extra_emulator_args: vec![
            "-M".to_string(),
            "pseries".to_string(),
            "-cpu".to_string(),
            "power8".to_string(),
        ],
    }
}
