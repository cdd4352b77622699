//! The runner-owned profile registry.
//!
//! Populated once at startup and read-only afterwards. Each candidate
//! profile is validated independently: a malformed profile is rejected
//! and reported by name without keeping the other architectures from
//! loading. The registry holds no resources, so a loaded instance can be
//! shared across any number of concurrent emulator sessions.

use crate::profile::{self, ArchBootProfile, ProfileError};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Read-only map from `architecture_id` to its boot profile.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, ArchBootProfile>,
}

impl ProfileRegistry {
    /// Validate and register a set of candidate profiles.
    ///
    /// # Arguments
    /// * `candidates` - The profiles to load, typically `archs::builtin_profiles()`.
    ///
    /// # Returns
    /// The registry of accepted profiles together with one error per
    /// rejected candidate. A candidate whose `architecture_id` is already
    /// registered is rejected as a duplicate; the first declaration wins.
    pub fn load(
        candidates: impl IntoIterator<Item = ArchBootProfile>,
    ) -> (ProfileRegistry, Vec<ProfileError>) {
        let mut registry = ProfileRegistry {
            profiles: BTreeMap::new(),
        };
        let mut rejected = Vec::new();

        for candidate in candidates {
            if let Err(error) = profile::validate(&candidate) {
                warn!("rejecting boot profile: {}", error);
                rejected.push(error);
                continue;
            }
            if registry.profiles.contains_key(&candidate.architecture_id) {
                let error = ProfileError::DuplicateArchitecture {
                    architecture: candidate.architecture_id.clone(),
                };
                warn!("rejecting boot profile: {}", error);
                rejected.push(error);
                continue;
            }
            registry
                .profiles
                .insert(candidate.architecture_id.clone(), candidate);
        }

        debug!(
            "loaded {} boot profile(s), rejected {}",
            registry.profiles.len(),
            rejected.len()
        );
        (registry, rejected)
    }

    /// Look up the profile for one architecture.
    pub fn get(&self, architecture_id: &str) -> Option<&ArchBootProfile> {
        self.profiles.get(architecture_id)
    }

    /// Iterate all registered profiles, ordered by architecture id.
    pub fn iter(&self) -> impl Iterator<Item = &ArchBootProfile> {
        self.profiles.values()
    }

    /// The registered architecture ids, in order.
    pub fn architecture_ids(&self) -> Vec<&str> {
        self.profiles.keys().map(|id| id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Resolve a profile's kernel image against a concrete build output root.
///
/// The profile only promises that the image exists after a successful
/// build, so this is the one check that cannot happen at registry load
/// time.
///
/// # Returns
/// * `Ok(path)` - The joined path, which names an existing file.
/// * `Err(ProfileError::MissingKernelImage)` - No file at that location.
pub fn resolve_kernel_image(
    build_root: &Path,
    profile: &ArchBootProfile,
) -> Result<PathBuf, ProfileError> {
    let path = build_root.join(&profile.kernel_image_path);
    if !path.is_file() {
        return Err(ProfileError::MissingKernelImage {
            architecture: profile.architecture_id.clone(),
            path: profile.kernel_image_path.clone(),
            build_root: build_root.display().to_string(),
        });
    }
    Ok(path)
}
