//! Opens a window and drives a camera from keyboard and mouse input.
//!
//! Usage: `pinhole [options.toml]`. Set `RUST_LOG=debug` to see every camera
//! change.

use std::path::Path;

use pinhole::{options::Options, viewer::Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
