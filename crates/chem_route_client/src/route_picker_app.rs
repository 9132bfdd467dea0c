//! Single-screen picker: the headline follows the selectors live.

use chem_route::{
    route_picker_table, Chemical, Objective, PlanningYear, RecommendedRoute, RouteSelection,
    ScenarioError, ScenarioResolver, ROUTE_PICKER_YEARS,
};
use eframe::egui;

pub const APP_TITLE: &str = "Optimal Chemical Production Route";
pub const APP_INTRO: &str = "Select a chemical, year, and optimization goal to get the optimal route.";

pub struct ChemicalRoutePickerApp {
    chemical: Chemical,
    year: PlanningYear,
    objective: Objective,
    last_logged: Option<RouteSelection>,
}

impl Default for ChemicalRoutePickerApp {
    fn default() -> Self {
        Self {
            chemical: Chemical::ALL[0],
            year: ROUTE_PICKER_YEARS[0],
            objective: Objective::ALL[0],
            last_logged: None,
        }
    }
}

impl ChemicalRoutePickerApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> RouteSelection {
        RouteSelection::new(self.chemical, self.year, self.objective)
    }

    pub fn set_selection(&mut self, selection: RouteSelection) {
        self.chemical = selection.chemical;
        self.year = selection.year;
        self.objective = selection.objective;
    }

    pub fn recommended_route(&self) -> Result<RecommendedRoute, ScenarioError> {
        route_picker_table().resolve(&self.selection()).copied()
    }

    pub fn headline(&self) -> Result<String, ScenarioError> {
        self.recommended_route()
            .map(|route| format!("✅ Optimal Route: {route}"))
    }

    fn log_selection_change(&mut self, outcome: &Result<String, ScenarioError>) {
        let selection = self.selection();
        if self.last_logged == Some(selection) {
            return;
        }
        self.last_logged = Some(selection);
        match outcome {
            Ok(headline) => log::info!("{selection}: {headline}"),
            Err(err) => log::error!("cannot resolve {selection}: {err}"),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading(APP_TITLE);
        ui.label(APP_INTRO);
        ui.add_space(8.0);

        egui::ComboBox::from_label("Choose a chemical")
            .selected_text(self.chemical.label())
            .show_ui(ui, |ui| {
                for option in Chemical::ALL {
                    ui.selectable_value(&mut self.chemical, option, option.label());
                }
            });
        egui::ComboBox::from_label("Choose a year")
            .selected_text(self.year.to_string())
            .show_ui(ui, |ui| {
                for option in ROUTE_PICKER_YEARS {
                    ui.selectable_value(&mut self.year, option, option.to_string());
                }
            });
        egui::ComboBox::from_label("Optimization goal")
            .selected_text(self.objective.short_label())
            .show_ui(ui, |ui| {
                for option in Objective::ALL {
                    ui.selectable_value(&mut self.objective, option, option.short_label());
                }
            });

        ui.add_space(12.0);
        let outcome = self.headline();
        self.log_selection_change(&outcome);
        match outcome {
            Ok(headline) => {
                ui.heading(headline);
            }
            Err(err) => {
                ui.colored_label(ui.visuals().error_fg_color, err.to_string());
            }
        }
    }
}

impl eframe::App for ChemicalRoutePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.show(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::{kittest::Queryable as _, Harness};

    #[test]
    fn headline_follows_selection_rule() {
        let mut app = ChemicalRoutePickerApp::new();
        let cases = [
            (PlanningYear::Y2030, Objective::MinimizeImpact, RecommendedRoute::Green),
            (PlanningYear::Y2050, Objective::MinimizeImpact, RecommendedRoute::Biomethane),
            (PlanningYear::Y2030, Objective::MinimizeCost, RecommendedRoute::Fossil),
            (PlanningYear::Y2050, Objective::MinimizeCost, RecommendedRoute::Fossil),
        ];
        for chemical in Chemical::ALL {
            for (year, objective, expected) in cases {
                app.set_selection(RouteSelection::new(chemical, year, objective));
                assert_eq!(app.recommended_route(), Ok(expected), "{chemical} {year}");
            }
        }
    }

    #[test]
    fn year_outside_picker_table_is_unsupported() {
        let mut app = ChemicalRoutePickerApp::new();
        app.set_selection(RouteSelection::new(
            Chemical::Hydrogen,
            PlanningYear::Y2040,
            Objective::MinimizeCost,
        ));
        let err = app.headline().expect_err("2040 is not offered");
        assert!(matches!(err, ScenarioError::UnsupportedCombination { .. }));
    }

    #[test]
    fn default_screen_shows_fossil_headline() {
        let mut harness = Harness::new_ui_state(
            |ui, app: &mut ChemicalRoutePickerApp| app.show(ui),
            ChemicalRoutePickerApp::new(),
        );

        harness.fit_contents();
        harness.get_by_label(APP_TITLE);
        harness.get_by_label(APP_INTRO);
        harness.get_by_label("✅ Optimal Route: Fossil");
    }

    #[test]
    fn headline_updates_without_a_trigger() {
        let mut harness = Harness::new_ui_state(
            |ui, app: &mut ChemicalRoutePickerApp| app.show(ui),
            ChemicalRoutePickerApp::new(),
        );
        harness.run();

        harness.state_mut().set_selection(RouteSelection::new(
            Chemical::Methanol,
            PlanningYear::Y2030,
            Objective::MinimizeImpact,
        ));
        harness.run();

        harness.get_by_label("✅ Optimal Route: Green");
        assert!(harness.query_by_label("✅ Optimal Route: Fossil").is_none());
    }
}
