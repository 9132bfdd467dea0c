pub mod colors;
pub mod config;
pub mod flow_view;
pub mod icon_strip_view;
pub mod map_geometry;
pub mod progress_view;
pub mod route_picker_app;
pub mod supply_chain_app;
pub mod world_map;
mod country_borders;
mod world_outline;

pub use config::{ClientConfig, ClientConfigError};
pub use route_picker_app::ChemicalRoutePickerApp;
pub use supply_chain_app::MethanolSupplyChainApp;

/// Installs the `env_logger` backend; `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
