#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the version grammar and parser.
///
/// Any input must either parse or be rejected with an error, and a parsed
/// version must render to a string that parses back to the same value.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if !semvercomp::is_valid(s) {
            assert!(semvercomp::parse_version(s).is_err());
        }
        if let Ok(version) = semvercomp::parse_version(s) {
            let rendered = semvercomp::format_version(&version);
            assert_eq!(semvercomp::parse_version(&rendered), Ok(version));
        }
    }
});
