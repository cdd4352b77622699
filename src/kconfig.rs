//! Kernel configuration fragment handling.
//!
//! A fragment is a short piece of `.config`-syntax text: `CONFIG_FOO=y`
//! lines, the `# CONFIG_FOO is not set` disabled spelling, comments and
//! blank lines. The crate treats option values as opaque text; only the
//! console-providing options are interpreted, to cross-check the boot
//! command line against the drivers the fragment actually enables.

/// One `CONFIG_*` entry from a fragment, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    pub name: String,
    pub value: String,
}

/// Console-providing options and the device prefix each one binds.
///
/// Only options the built-in profiles rely on are listed; an option
/// missing from this table simply contributes no console binding.
const CONSOLE_OPTIONS: [(&str, &str); 7] = [
    ("CONFIG_SERIAL_8250_CONSOLE", "ttyS"),
    ("CONFIG_SERIAL_AMBA_PL011_CONSOLE", "ttyAMA"),
    ("CONFIG_SERIAL_SH_SCI_CONSOLE", "ttySC"),
    ("CONFIG_SERIAL_SUNZILOG_CONSOLE", "ttyS"),
    ("CONFIG_SCLP_CONSOLE", "ttysclp"),
    ("CONFIG_HVC_CONSOLE", "hvc"),
    ("CONFIG_VIRTIO_CONSOLE", "hvc"),
];

/// Parse a fragment into its ordered list of options.
///
/// # Returns
/// * `Ok(options)` with one entry per `CONFIG_*` line.
/// * `Err((line_number, line_text))` for the first line that is neither
///   an assignment, a "not set" marker, a comment nor blank.
pub fn parse_fragment(fragment: &str) -> Result<Vec<ConfigOption>, (usize, String)> {
    let mut options = Vec::new();

    for (index, raw) in fragment.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // "# CONFIG_FOO is not set" is how the kernel build system spells
        // a disabled option; it parses as the option with value "n".
        if let Some(rest) = line.strip_prefix("# ") {
            if let Some(name) = rest.strip_suffix(" is not set") {
                if is_config_name(name) {
                    options.push(ConfigOption {
                        name: name.to_string(),
                        value: "n".to_string(),
                    });
                    continue;
                }
            }
        }
        if line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((name, value)) if is_config_name(name) => {
                options.push(ConfigOption {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            _ => return Err((index + 1, raw.to_string())),
        }
    }

    Ok(options)
}

fn is_config_name(name: &str) -> bool {
    name.strip_prefix("CONFIG_").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    })
}

/// Merge a profile fragment into a base configuration, later-wins.
///
/// Fragment entries replace same-named base entries in place; names the
/// base does not contain are appended in fragment order. The result holds
/// each option name exactly once.
pub fn merge(base: &[ConfigOption], fragment: &[ConfigOption]) -> Vec<ConfigOption> {
    let mut merged: Vec<ConfigOption> = base.to_vec();

    for option in fragment {
        match merged.iter_mut().find(|existing| existing.name == option.name) {
            Some(existing) => existing.value = option.value.clone(),
            None => merged.push(option.clone()),
        }
    }

    merged
}

/// Console device prefixes provided by the enabled options in `options`.
///
/// An option binds its console only when enabled (`y` or `m`); the
/// disabled spelling contributes nothing.
pub fn console_bindings(options: &[ConfigOption]) -> Vec<&'static str> {
    let mut bindings = Vec::new();

    for option in options {
        if option.value != "y" && option.value != "m" {
            continue;
        }
        for (name, prefix) in CONSOLE_OPTIONS {
            if option.name == name && !bindings.contains(&prefix) {
                bindings.push(prefix);
            }
        }
    }

    bindings
}
