//! Release codes of .NET Framework 4.5 and later.
//!
//! The `Release` value under `NDP\v4\Full` identifies the installed build.
//! Only the codes listed here are translated; newer builds stay unreported
//! until they are added.

/// Known release codes and their display versions.
pub const RELEASE_CODES: &[(u64, &str)] = &[
    (528040, "4.8"),
    (461808, "4.7.2"),
    (461308, "4.7.1"),
    (460798, "4.7"),
    (394802, "4.6.2"),
    (394254, "4.6.1"),
    (393295, "4.6"),
    (379893, "4.5.2"),
    (378675, "4.5.1"),
    (378389, "4.5"),
];

/// Translate a release code to its display version.
pub fn version_for_release(code: u64) -> Option<&'static str> {
    RELEASE_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, version)| *version)
}
