use chem_route_client::{init_logging, ChemicalRoutePickerApp};
use eframe::egui;

fn main() -> eframe::Result<()> {
    init_logging();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(640.0, 360.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Optimal Chemical Production Route",
        native_options,
        Box::new(|_cc| Ok(Box::<ChemicalRoutePickerApp>::default())),
    )
}
