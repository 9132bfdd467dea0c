//! Selections, production routes and the scenarios they resolve to.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::ScenarioError;

pub const MAX_ROUTES_PER_SCENARIO: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlanningYear {
    #[serde(rename = "2030")]
    Y2030,
    #[serde(rename = "2040")]
    Y2040,
    #[serde(rename = "2050")]
    Y2050,
}

impl PlanningYear {
    pub const ALL: [Self; 3] = [Self::Y2030, Self::Y2040, Self::Y2050];

    pub fn value(self) -> u16 {
        match self {
            Self::Y2030 => 2030,
            Self::Y2040 => 2040,
            Self::Y2050 => 2050,
        }
    }
}

impl fmt::Display for PlanningYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    MinimizeCost,
    MinimizeImpact,
}

impl Objective {
    pub const ALL: [Self; 2] = [Self::MinimizeCost, Self::MinimizeImpact];

    /// Caption used by the supply chain screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::MinimizeCost => "Minimize Cost",
            Self::MinimizeImpact => "Minimize Global Warming Impact",
        }
    }

    /// Caption used by the route picker screen.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::MinimizeCost => "Minimize Cost",
            Self::MinimizeImpact => "Minimize Impact",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Chemical {
    Methanol,
    Hydrogen,
}

impl Chemical {
    pub const ALL: [Self; 2] = [Self::Methanol, Self::Hydrogen];

    pub fn label(self) -> &'static str {
        match self {
            Self::Methanol => "Methanol",
            Self::Hydrogen => "Hydrogen",
        }
    }
}

impl fmt::Display for Chemical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RouteKind {
    Electrolytic,
    Biomethane,
    Fossil,
}

impl RouteKind {
    pub const ALL: [Self; 3] = [Self::Electrolytic, Self::Biomethane, Self::Fossil];

    pub fn label(self) -> &'static str {
        match self {
            Self::Electrolytic => "Electrolytic",
            Self::Biomethane => "Biomethane",
            Self::Fossil => "Fossil",
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            Self::Electrolytic => "green",
            Self::Biomethane => "blue",
            Self::Fossil => "#404040",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            Self::Electrolytic => "Electrolytic production",
            Self::Biomethane => "Biomethane production",
            Self::Fossil => "Fossil production",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub is_export: bool,
}

impl Site {
    /// Sites ship without a caption; the map still carries the empty label.
    pub fn unnamed(lat: f64, lon: f64, is_export: bool) -> Self {
        Self {
            name: String::new(),
            lat,
            lon,
            is_export,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub kind: RouteKind,
    pub color: String,
    pub sites: Vec<Site>,
}

impl Route {
    pub fn new(kind: RouteKind, sites: Vec<Site>) -> Self {
        Self {
            kind,
            color: kind.default_color().to_string(),
            sites,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    routes: Vec<Route>,
}

impl Scenario {
    pub fn new(routes: Vec<Route>) -> Result<Self, ScenarioError> {
        if routes.is_empty() {
            return Err(ScenarioError::EmptyScenario);
        }
        if routes.len() > MAX_ROUTES_PER_SCENARIO {
            return Err(ScenarioError::TooManyRoutes {
                count: routes.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for route in &routes {
            if !seen.insert(route.kind) {
                return Err(ScenarioError::DuplicateRoute { kind: route.kind });
            }
        }
        if seen.contains(&RouteKind::Electrolytic) && seen.contains(&RouteKind::Fossil) {
            return Err(ScenarioError::ConflictingRoutes {
                first: RouteKind::Electrolytic,
                second: RouteKind::Fossil,
            });
        }

        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, kind: RouteKind) -> Option<&Route> {
        self.routes.iter().find(|route| route.kind == kind)
    }

    pub fn contains(&self, kind: RouteKind) -> bool {
        self.route(kind).is_some()
    }

    pub fn kinds(&self) -> BTreeSet<RouteKind> {
        self.routes.iter().map(|route| route.kind).collect()
    }

    /// Route labels in table order, e.g. `"Fossil, Biomethane"`.
    pub fn route_summary(&self) -> String {
        self.routes
            .iter()
            .map(|route| route.kind.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn site_count(&self) -> usize {
        self.routes.iter().map(|route| route.sites.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SupplyChainSelection {
    pub year: PlanningYear,
    pub objective: Objective,
}

impl SupplyChainSelection {
    pub fn new(year: PlanningYear, objective: Objective) -> Self {
        Self { year, objective }
    }
}

impl fmt::Display for SupplyChainSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.year, self.objective)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RouteSelection {
    pub chemical: Chemical,
    pub year: PlanningYear,
    pub objective: Objective,
}

impl RouteSelection {
    pub fn new(chemical: Chemical, year: PlanningYear, objective: Objective) -> Self {
        Self {
            chemical,
            year,
            objective,
        }
    }
}

impl fmt::Display for RouteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.chemical,
            self.year,
            self.objective.short_label()
        )
    }
}

/// Headline answer of the route picker. Deliberately separate from
/// [`RouteKind`]: the picker speaks of "Green" where the supply chain
/// screen speaks of "Electrolytic".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecommendedRoute {
    Green,
    Biomethane,
    Fossil,
}

impl RecommendedRoute {
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Biomethane => "Biomethane",
            Self::Fossil => "Fossil",
        }
    }
}

impl fmt::Display for RecommendedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(kind: RouteKind) -> Route {
        Route::new(kind, vec![Site::unnamed(0.0, 0.0, false)])
    }

    #[test]
    fn planning_year_displays_numeric_value() {
        assert_eq!(PlanningYear::Y2030.value(), 2030);
        assert_eq!(PlanningYear::Y2040.to_string(), "2040");
    }

    #[test]
    fn scenario_rejects_electrolytic_with_fossil() {
        let err = Scenario::new(vec![route(RouteKind::Electrolytic), route(RouteKind::Fossil)])
            .expect_err("should fail");
        assert_eq!(
            err,
            ScenarioError::ConflictingRoutes {
                first: RouteKind::Electrolytic,
                second: RouteKind::Fossil,
            }
        );
    }

    #[test]
    fn scenario_rejects_duplicate_and_oversized_route_sets() {
        let err = Scenario::new(vec![route(RouteKind::Biomethane), route(RouteKind::Biomethane)])
            .expect_err("should fail");
        assert_eq!(
            err,
            ScenarioError::DuplicateRoute {
                kind: RouteKind::Biomethane
            }
        );

        let err = Scenario::new(RouteKind::ALL.into_iter().map(route).collect())
            .expect_err("should fail");
        assert_eq!(err, ScenarioError::TooManyRoutes { count: 3 });

        let err = Scenario::new(Vec::new()).expect_err("should fail");
        assert_eq!(err, ScenarioError::EmptyScenario);
    }

    #[test]
    fn route_summary_keeps_table_order() {
        let scenario = Scenario::new(vec![route(RouteKind::Fossil), route(RouteKind::Biomethane)])
            .expect("valid scenario");
        assert_eq!(scenario.route_summary(), "Fossil, Biomethane");
        assert!(scenario.contains(RouteKind::Fossil));
        assert!(!scenario.contains(RouteKind::Electrolytic));
        assert_eq!(scenario.site_count(), 2);
    }

    #[test]
    fn route_uses_kind_default_color() {
        assert_eq!(route(RouteKind::Fossil).color, "#404040");
        assert_eq!(route(RouteKind::Electrolytic).color, "green");
        assert_eq!(route(RouteKind::Biomethane).color, "blue");
    }

    #[test]
    fn selection_display_uses_screen_specific_captions() {
        let selection = SupplyChainSelection::new(PlanningYear::Y2050, Objective::MinimizeImpact);
        assert_eq!(selection.to_string(), "2050 / Minimize Global Warming Impact");

        let selection =
            RouteSelection::new(Chemical::Hydrogen, PlanningYear::Y2030, Objective::MinimizeImpact);
        assert_eq!(selection.to_string(), "Hydrogen / 2030 / Minimize Impact");
    }
}
