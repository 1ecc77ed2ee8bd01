// File: crates/chronology-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia/ICU registry lookups (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
