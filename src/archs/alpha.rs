//! Boot profile for Alpha under the emulator's `alpha` machine.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_SERIAL_8250=y
CONFIG_SERIAL_8250_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile::new(
        "alpha",
        KCONFIG,
        "alpha",
        "arch/alpha/boot/vmkernel",
        "console=ttyS0",
    )
}
