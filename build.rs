use std::process::Command;

/// Packaged source tarballs have no `.git`; packagers set this instead
const REV_OVERRIDE: &str = "CLAWTANK_BUILD_REV";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", REV_OVERRIDE);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let rev = std::env::var(REV_OVERRIDE)
        .ok()
        .filter(|rev| !rev.trim().is_empty())
        .or_else(git_describe)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CLAWTANK_REV={}", rev.trim());
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}
