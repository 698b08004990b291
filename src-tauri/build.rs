fn main() {
    // Compiled into the binary as the fallback X-App-Key (see build_info.rs)
    println!("cargo:rerun-if-env-changed=NFC_CONSOLE_EMBEDDED_APP_KEY");

    tauri_build::build()
}
