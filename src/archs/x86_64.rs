//! Boot profile for 64-bit x86.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_SERIAL_8250=y
CONFIG_SERIAL_8250_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile::new(
        "x86_64",
        KCONFIG,
        "x86_64",
        "arch/x86/boot/bzImage",
        "console=ttyS0",
    )
}
