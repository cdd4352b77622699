//! Boot profile for 64-bit ARM. The `max` CPU model keeps the emulated
//! core independent of whatever the host happens to be.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_SERIAL_AMBA_PL011=y
CONFIG_SERIAL_AMBA_PL011_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile {
        architecture_id: "arm64".to_string(),
        kernel_config_fragment: KCONFIG.to_string(),
        emulator_target: "aarch64".to_string(),
        kernel_image_path: "arch/arm64/boot/Image.gz".to_string(),
        boot_command_line: "console=ttyAMA0".to_string(),
        extra_emulator_args: vec![
            "-machine".to_string(),
            "virt".to_string(),
            "-cpu".to_string(),
            "max".to_string(),
        ],
    }
}
