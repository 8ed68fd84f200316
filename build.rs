fn main() {
    // footer year, shared by the server render and the wasm bundle
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().to_rfc3339()
    );

    // content is embedded into the server binary at compile time
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_SITE_URL");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_SCROLL_SNAP");
}
