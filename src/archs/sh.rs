//! Boot profile for SuperH on the emulated R2D board. The board's first
//! serial port is routed to null so test output arrives on ttySC1.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_CPU_SUBTYPE_SH7751R=y
CONFIG_MEMORY_START=0x0c000000
CONFIG_SERIAL_SH_SCI=y
CONFIG_SERIAL_SH_SCI_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile {
        architecture_id: "sh".to_string(),
        kernel_config_fragment: KCONFIG.to_string(),
        emulator_target: "sh4".to_string(),
        kernel_image_path: "arch/sh/boot/zImage".to_string(),
        boot_command_line: "console=ttySC1 earlycon".to_string(),
        extra_emulator_args: vec![
            "-machine".to_string(),
            "r2d".to_string(),
            "-serial".to_string(),
            "null".to_string(),
            "-serial".to_string(),
            "mon:stdio".to_string(),
        ],
    }
}
