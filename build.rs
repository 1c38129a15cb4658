fn main() {
    // Stamp the build timestamp into the binary, surfaced as BUILD_DATE.
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=BUILD_DATE={stamp}");
}
