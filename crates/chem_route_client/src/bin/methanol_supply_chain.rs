use chem_route_client::{init_logging, ClientConfig, MethanolSupplyChainApp};
use eframe::egui;

fn main() -> eframe::Result<()> {
    init_logging();
    let config = load_config();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 900.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Optimal Methanol Supply Chain",
        native_options,
        Box::new(|_cc| Ok(Box::new(MethanolSupplyChainApp::new(config)))),
    )
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_default_sources() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("invalid client config: {err}; falling back to defaults");
            ClientConfig::default()
        }
    }
}
