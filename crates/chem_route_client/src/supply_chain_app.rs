use std::time::Duration;

use chem_route::{
    methanol_supply_chain_table, select_icon_strip, IconStrip, Objective, PlanningYear,
    ProcessFlowGraph, Scenario, ScenarioError, ScenarioResolver, SupplyChainSelection,
    SUPPLY_CHAIN_YEARS,
};
use eframe::egui;

use crate::config::ClientConfig;
use crate::flow_view::{render_flow_diagram, FlowDiagram};
use crate::icon_strip_view::render_icon_strip;
use crate::progress_view::{render_progress, StagedRun};
use crate::world_map::{build_map_markers, render_world_map, MapMarker};

pub const APP_TITLE: &str = "Optimal Methanol Supply Chain";
pub const RUN_BUTTON_LABEL: &str = "Run Optimization";
const REPAINT_INTERVAL: Duration = Duration::from_millis(16);

/// Everything drawn for one press of the run button.
struct RunResults {
    selection: SupplyChainSelection,
    scenario: &'static Scenario,
    staged: Option<StagedRun>,
    diagram: FlowDiagram,
    markers: Vec<MapMarker>,
    icon_strip: Option<&'static IconStrip>,
}

pub struct MethanolSupplyChainApp {
    config: ClientConfig,
    year: PlanningYear,
    objective: Objective,
    results: Option<RunResults>,
    error_text: Option<String>,
}

impl MethanolSupplyChainApp {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            year: SUPPLY_CHAIN_YEARS[0],
            objective: Objective::ALL[0],
            results: None,
            error_text: None,
        }
    }

    pub fn selection(&self) -> SupplyChainSelection {
        SupplyChainSelection::new(self.year, self.objective)
    }

    pub fn set_selection(&mut self, year: PlanningYear, objective: Objective) {
        if self.year == year && self.objective == objective {
            return;
        }
        self.year = year;
        self.objective = objective;
        self.clear_results();
    }

    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error_text.as_deref()
    }

    /// True while the cosmetic stages are still playing.
    pub fn is_running(&self) -> bool {
        self.results
            .as_ref()
            .and_then(|results| results.staged)
            .is_some_and(|staged| !staged.snapshot().finished)
    }

    fn clear_results(&mut self) {
        self.results = None;
        self.error_text = None;
    }

    pub fn run_optimization(&mut self) {
        let selection = self.selection();
        self.clear_results();
        log::info!("run optimization for {selection}");

        match resolve_scenario(&selection) {
            Ok(scenario) => {
                log::info!(
                    "resolved {selection}: {} ({} sites)",
                    scenario.route_summary(),
                    scenario.site_count()
                );
                self.results = Some(RunResults {
                    selection,
                    scenario,
                    staged: self
                        .config
                        .show_progress
                        .then(|| StagedRun::start(self.config.progress_timeline())),
                    diagram: FlowDiagram::from_graph(&ProcessFlowGraph::from_scenario(scenario)),
                    markers: build_map_markers(scenario),
                    icon_strip: select_icon_strip(&scenario.kinds()),
                });
            }
            Err(err) => {
                log::error!("cannot resolve {selection}: {err}");
                self.error_text = Some(err.to_string());
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading(APP_TITLE);
        ui.add_space(8.0);

        let mut year = self.year;
        let mut objective = self.objective;
        egui::ComboBox::from_label("Choose a year")
            .selected_text(year.to_string())
            .show_ui(ui, |ui| {
                for option in SUPPLY_CHAIN_YEARS {
                    ui.selectable_value(&mut year, option, option.to_string());
                }
            });
        egui::ComboBox::from_label("Optimization goal")
            .selected_text(objective.label())
            .show_ui(ui, |ui| {
                for option in Objective::ALL {
                    ui.selectable_value(&mut objective, option, option.label());
                }
            });
        self.set_selection(year, objective);

        if ui.button(RUN_BUTTON_LABEL).clicked() {
            self.run_optimization();
        }

        if let Some(error_text) = &self.error_text {
            ui.colored_label(ui.visuals().error_fg_color, error_text.as_str());
        }

        let Some(results) = self.results.as_ref() else {
            return;
        };

        if let Some(staged) = results.staged {
            let snapshot = staged.snapshot();
            render_progress(ui, &snapshot);
            if !snapshot.finished {
                return;
            }
        }

        ui.add_space(24.0);
        ui.heading("🔁 Process Flow");
        ui.add_space(12.0);
        render_flow_diagram(ui, &results.diagram);

        ui.add_space(24.0);
        ui.heading(format!(
            "🌍 Production and export locations in {}:",
            results.selection.year
        ));
        render_world_map(ui, &results.markers, self.config.map_height);
        ui.label(format!("Routes: {}", results.scenario.route_summary()));

        if let Some(strip) = results.icon_strip {
            ui.add_space(24.0);
            ui.heading("🌍 Sustainable Development Goals (SDGs)");
            ui.add_space(12.0);
            render_icon_strip(ui, strip);
        }
    }
}

fn resolve_scenario(selection: &SupplyChainSelection) -> Result<&'static Scenario, ScenarioError> {
    methanol_supply_chain_table()?.resolve(selection)
}

impl eframe::App for MethanolSupplyChainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.show(ui));
        });

        if self.is_running() {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }
}
