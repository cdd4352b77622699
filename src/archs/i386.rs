//! Boot profile for 32-bit x86. The image lives under the shared x86
//! architecture tree in the build output.

use crate::profile::ArchBootProfile;

const KCONFIG: &str = "\
CONFIG_SERIAL_8250=y
CONFIG_SERIAL_8250_CONSOLE=y
";

pub fn profile() -> ArchBootProfile {
    ArchBootProfile::new(
        "i386",
        KCONFIG,
        "i386",
        "arch/x86/boot/bzImage",
        "console=ttyS0",
    )
}
