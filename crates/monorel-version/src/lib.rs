use monorel_core::VersionBump;
use semver::Version;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("version '{version}' must have exactly three dot-separated components, found {found}")]
    ComponentCount { version: String, found: usize },

    #[error("version '{version}' has non-numeric component '{component}'")]
    NonNumericComponent { version: String, component: String },
}

/// Parses a strict `major.minor.patch` triple.
///
/// Pre-release and build suffixes are rejected rather than dropped.
///
/// # Errors
///
/// Returns `VersionError` if the string does not split into exactly three
/// unsigned integer components.
pub fn parse_triple(version: &str) -> Result<Version, VersionError> {
    let components: Vec<&str> = version.split('.').collect();
    if components.len() != 3 {
        return Err(VersionError::ComponentCount {
            version: version.to_string(),
            found: components.len(),
        });
    }

    let mut numbers = [0u64; 3];
    for (slot, component) in numbers.iter_mut().zip(&components) {
        *slot = parse_component(version, component)?;
    }

    Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

fn parse_component(version: &str, component: &str) -> Result<u64, VersionError> {
    let non_numeric = || VersionError::NonNumericComponent {
        version: version.to_string(),
        component: component.to_string(),
    };

    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric());
    }

    component.parse().map_err(|_| non_numeric())
}

#[must_use]
pub fn bump_version(version: &Version, bump: &VersionBump) -> Version {
    let mut new_version = version.clone();

    match bump {
        VersionBump::Major => {
            new_version.major += 1;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        VersionBump::Minor => {
            new_version.minor += 1;
            new_version.patch = 0;
        }
        VersionBump::Patch => {
            new_version.patch += 1;
        }
        VersionBump::Custom(_) => {}
    }

    new_version
}

/// Computes the version string a release will carry.
///
/// Custom versions are returned verbatim without syntax checks.
///
/// # Errors
///
/// Returns `VersionError` if a deterministic bump is requested and `current`
/// is not a strict triple.
pub fn resolve_version(current: &str, bump: &VersionBump) -> Result<String, VersionError> {
    if let VersionBump::Custom(version) = bump {
        return Ok(version.clone());
    }

    let parsed = parse_triple(current)?;
    Ok(bump_version(&parsed, bump).to_string())
}
