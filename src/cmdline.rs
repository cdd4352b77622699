//! Kernel boot command line inspection.
//!
//! The command line is opaque to this crate except for `console=`
//! parameters, which name the device the kernel directs boot output to
//! and therefore must match a driver the config fragment enables.

/// Device tokens of every `console=` parameter, in order of appearance.
///
/// `console=ttyS0,115200` yields `ttyS0`; options after the comma belong
/// to the device and are dropped. All other parameters are ignored.
pub fn console_devices(cmdline: &str) -> Vec<&str> {
    cmdline
        .split_whitespace()
        .filter_map(|param| param.strip_prefix("console="))
        .map(|device| device.split(',').next().unwrap_or(device))
        .filter(|device| !device.is_empty())
        .collect()
}

/// Driver prefix of a console device name: `ttyS0` -> `ttyS`,
/// `ttysclp0` -> `ttysclp`. The trailing unit number is what varies per
/// instance; the prefix is what a console-providing driver binds.
pub fn driver_prefix(device: &str) -> &str {
    device.trim_end_matches(|c: char| c.is_ascii_digit())
}
