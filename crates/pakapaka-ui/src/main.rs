#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Page bundle entry point. The server templates load the wasm build, which
//! binds `document.body` once it is parsed.

#[cfg(target_arch = "wasm32")]
fn main() {
    pakapaka_ui::run_app();
}

/// Native builds have no document to bind; point at the wasm target instead.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(
        std::io::stderr().lock(),
        "pakapaka-ui binds page behaviors in the browser only; \
         build it with `cargo build --target wasm32-unknown-unknown`."
    )
}
