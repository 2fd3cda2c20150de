//! FolderView — a minimal desktop file-system browser.
//!
//! Thin binary entry point. All logic lives in the `folderview-core`
//! and `folderview-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("FolderView starting");

    let icon = folderview_gui::icon::generate_icon(64);

    // Drives are enumerated before the window opens so the first frame
    // already shows them.
    let state = folderview_gui::FolderViewState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("FolderView")
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([480.0, 320.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "FolderView",
        options,
        Box::new(|cc| {
            Ok(Box::new(folderview_gui::FolderViewApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
