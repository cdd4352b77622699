//! Boot profile for s390x. Console output goes through the SCLP service
//! interface rather than a UART.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_EXPERT=y
CONFIG_SCLP_TTY=y
CONFIG_SCLP_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile {
        architecture_id: "s390".to_string(),
        kernel_config_fragment: KCONFIG.to_string(),
        emulator_target: "s390x".to_string(),
        kernel_image_path: "arch/s390/boot/bzImage".to_string(),
        boot_command_line: "console=ttysclp0".to_string(),
        extra_emulator_args: vec![
            "-machine".to_string(),
            "s390-ccw-virtio".to_string(),
            "-cpu".to_string(),
            "qemu".to_string(),
        ],
    }
}
