/// slidekit showcase entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use slidekit::AppConfig;

    // An explicit path wins over the default config location.
    let (loaded, source) = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load_from_path(std::path::Path::new(&path)) {
            Ok(config) => (Ok(Some(config)), path),
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => (
            AppConfig::load_from_default_path(),
            AppConfig::default_path()
                .map_or_else(|| "default location".to_string(), |p| p.display().to_string()),
        ),
    };

    slidekit_ui::init_logging(AppConfig::startup_log_level(&loaded).to_level_filter());
    let config = AppConfig::or_default_logged(loaded, &source);
    log::info!("slidekit starting with {:?} breakpoint", config.slider.breakpoint);

    slidekit::native::run(&config);
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
