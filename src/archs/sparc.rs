//! Boot profile for 32-bit SPARC. The Zilog serial driver registers its
//! ports as ttyS, so the standard console name still applies.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_SERIAL_SUNZILOG=y
CONFIG_SERIAL_SUNZILOG_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile {
        architecture_id: "sparc".to_string(),
        kernel_config_fragment: KCONFIG.to_string(),
        emulator_target: "sparc".to_string(),
        kernel_image_path: "arch/sparc/boot/zImage".to_string(),
        boot_command_line: "console=ttyS0 mem=256M".to_string(),
        extra_emulator_args: vec!["-m".to_string(), "256".to_string()],
    }
}
