//! Built-in boot profiles, one module per supported architecture.
//!
//! Each module is a pure data declaration exporting a single `profile()`
//! constructor, so adding an architecture means adding one independently
//! reviewable file and listing it in [`builtin_profiles`]. No module here
//! contains logic.

pub mod alpha;
pub mod arm;
pub mod arm64;
pub mod i386;
pub mod powerpc;
pub mod s390;
pub mod sh;
pub mod sparc;
pub mod x86_64;

use crate::profile::ArchBootProfile;

/// All built-in profiles, ready to be handed to `ProfileRegistry::load`.
pub fn builtin_profiles() -> Vec<ArchBootProfile> {
    vec![
        alpha::profile(),
        arm::profile(),
        arm64::profile(),
        i386::profile(),
        powerpc::profile(),
        s390::profile(),
        sh::profile(),
        sparc::profile(),
        x86_64::profile(),
    ]
}
