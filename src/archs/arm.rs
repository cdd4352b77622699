//! Boot profile for 32-bit ARM on the emulator's generic `virt` machine.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_ARCH_VIRT=y
CONFIG_SERIAL_AMBA_PL011=y
CONFIG_SERIAL_AMBA_PL011_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile {
        architecture_id: "arm".to_string(),
        kernel_config_fragment: KCONFIG.to_string(),
        emulator_target: "arm".to_string(),
        kernel_image_path: "arch/arm/boot/zImage".to_string(),
        boot_command_line: "console=ttyAMA0".to_string(),
        extra_emulator_args: vec!["-machine".to_string(), "virt".to_string()],
    }
}
