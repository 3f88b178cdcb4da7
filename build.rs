fn main() {
    // Stamped into the footer and the server start-up log.
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    // Content is embedded with rust-embed; rebuild when it changes.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=blog");
}
