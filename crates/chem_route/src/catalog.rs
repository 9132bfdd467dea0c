//! Compiled-in result tables for both screens.
//!
//! The supply chain screen and the route picker answer nominally the same
//! question with rules that do not agree (the picker says "Green" for 2030
//! impact, the supply chain screen shows Electrolytic plus Biomethane). Each
//! keeps its own table.

use std::sync::OnceLock;

use crate::model::{
    Chemical, Objective, PlanningYear, RecommendedRoute, Route, RouteKind, RouteSelection,
    Scenario, Site, SupplyChainSelection,
};
use crate::resolver::{ScenarioError, ScenarioTable};

pub const METHANOL_SUPPLY_CHAIN_TABLE: &str = "methanol_supply_chain";
pub const ROUTE_PICKER_TABLE: &str = "chemical_route_picker";

pub const SUPPLY_CHAIN_YEARS: [PlanningYear; 3] = PlanningYear::ALL;
pub const ROUTE_PICKER_YEARS: [PlanningYear; 2] = [PlanningYear::Y2030, PlanningYear::Y2050];

pub type MethanolSupplyChainTable = ScenarioTable<SupplyChainSelection, Scenario>;
pub type RoutePickerTable = ScenarioTable<RouteSelection, RecommendedRoute>;

#[derive(Debug, Clone, Copy)]
struct Anchor {
    lat: f64,
    lon: f64,
}

impl Anchor {
    fn production(self) -> Site {
        Site::unnamed(self.lat, self.lon, false)
    }

    fn export(self) -> Site {
        Site::unnamed(self.lat, self.lon, true)
    }
}

const CANADA: Anchor = Anchor {
    lat: 55.1262,
    lon: 77.2090,
};
const CHILE: Anchor = Anchor {
    lat: -53.1638,
    lon: -70.9171,
};
const NETHERLANDS: Anchor = Anchor {
    lat: 53.3326,
    lon: 6.9135,
};
const SWEDEN: Anchor = Anchor {
    lat: 63.2889,
    lon: 18.7160,
};
const BRAZIL: Anchor = Anchor {
    lat: -21.8076,
    lon: -41.1415,
};
const INDIA: Anchor = Anchor {
    lat: 18.3584,
    lon: 81.8982,
};
const CHINA: Anchor = Anchor {
    lat: 39.2810,
    lon: 107.7657,
};
const AUSTRALIA: Anchor = Anchor {
    lat: -41.0524,
    lon: 145.9064,
};
const UNITED_STATES: Anchor = Anchor {
    lat: 28.8880,
    lon: -96.0035,
};
const EGYPT: Anchor = Anchor {
    lat: 31.2632,
    lon: 32.3055,
};

/// Methanol supply chain table, built on first use and shared for the
/// lifetime of the process.
pub fn methanol_supply_chain_table() -> Result<&'static MethanolSupplyChainTable, ScenarioError> {
    static TABLE: OnceLock<Result<MethanolSupplyChainTable, ScenarioError>> = OnceLock::new();
    TABLE
        .get_or_init(build_methanol_supply_chain_table)
        .as_ref()
        .map_err(Clone::clone)
}

pub fn route_picker_table() -> &'static RoutePickerTable {
    static TABLE: OnceLock<RoutePickerTable> = OnceLock::new();
    TABLE.get_or_init(build_route_picker_table)
}

fn build_methanol_supply_chain_table() -> Result<MethanolSupplyChainTable, ScenarioError> {
    let impact_near_term = Scenario::new(vec![
        Route::new(
            RouteKind::Electrolytic,
            vec![
                CANADA.production(),
                CHILE.export(),
                NETHERLANDS.export(),
                SWEDEN.production(),
            ],
        ),
        Route::new(
            RouteKind::Biomethane,
            vec![BRAZIL.export(), INDIA.production()],
        ),
    ])?;
    let impact_2050 = Scenario::new(vec![
        Route::new(
            RouteKind::Electrolytic,
            vec![CHILE.export(), NETHERLANDS.production()],
        ),
        Route::new(
            RouteKind::Biomethane,
            vec![
                BRAZIL.export(),
                INDIA.production(),
                CHINA.export(),
                AUSTRALIA.production(),
            ],
        ),
    ])?;
    let cost_near_term = Scenario::new(vec![
        Route::new(
            RouteKind::Fossil,
            vec![
                UNITED_STATES.export(),
                CHINA.production(),
                INDIA.production(),
                EGYPT.export(),
            ],
        ),
        Route::new(RouteKind::Biomethane, vec![BRAZIL.export()]),
    ])?;
    let cost_2050 = Scenario::new(vec![
        Route::new(
            RouteKind::Fossil,
            vec![UNITED_STATES.export(), CHINA.production()],
        ),
        Route::new(
            RouteKind::Biomethane,
            vec![BRAZIL.export(), INDIA.production()],
        ),
    ])?;

    let key = SupplyChainSelection::new;
    Ok(ScenarioTable::new(METHANOL_SUPPLY_CHAIN_TABLE)
        .with_entry(
            key(PlanningYear::Y2030, Objective::MinimizeImpact),
            impact_near_term.clone(),
        )
        .with_entry(
            key(PlanningYear::Y2040, Objective::MinimizeImpact),
            impact_near_term,
        )
        .with_entry(key(PlanningYear::Y2050, Objective::MinimizeImpact), impact_2050)
        .with_entry(
            key(PlanningYear::Y2030, Objective::MinimizeCost),
            cost_near_term.clone(),
        )
        .with_entry(key(PlanningYear::Y2040, Objective::MinimizeCost), cost_near_term)
        .with_entry(key(PlanningYear::Y2050, Objective::MinimizeCost), cost_2050))
}

fn build_route_picker_table() -> RoutePickerTable {
    let mut table = ScenarioTable::new(ROUTE_PICKER_TABLE);
    for chemical in Chemical::ALL {
        for year in ROUTE_PICKER_YEARS {
            for objective in Objective::ALL {
                table = table.with_entry(
                    RouteSelection::new(chemical, year, objective),
                    recommend_route(year, objective),
                );
            }
        }
    }
    table
}

fn recommend_route(year: PlanningYear, objective: Objective) -> RecommendedRoute {
    match objective {
        Objective::MinimizeImpact if year == PlanningYear::Y2030 => RecommendedRoute::Green,
        Objective::MinimizeImpact => RecommendedRoute::Biomethane,
        Objective::MinimizeCost => RecommendedRoute::Fossil,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ScenarioResolver;

    #[test]
    fn supply_chain_table_covers_every_year_and_objective() {
        let table = methanol_supply_chain_table().expect("table builds");
        assert_eq!(table.name(), METHANOL_SUPPLY_CHAIN_TABLE);
        assert_eq!(table.len(), SUPPLY_CHAIN_YEARS.len() * Objective::ALL.len());
    }

    #[test]
    fn near_term_years_share_the_same_scenario() {
        let table = methanol_supply_chain_table().expect("table builds");
        for objective in Objective::ALL {
            let y2030 = table
                .resolve(&SupplyChainSelection::new(PlanningYear::Y2030, objective))
                .expect("2030");
            let y2040 = table
                .resolve(&SupplyChainSelection::new(PlanningYear::Y2040, objective))
                .expect("2040");
            assert_eq!(y2030, y2040);
        }
    }

    #[test]
    fn every_site_name_is_blank() {
        let table = methanol_supply_chain_table().expect("table builds");
        for (_, scenario) in table.entries() {
            for route in scenario.routes() {
                assert!(route.sites.iter().all(|site| site.name.is_empty()));
            }
        }
    }

    #[test]
    fn route_picker_ignores_chemical() {
        let table = route_picker_table();
        for year in ROUTE_PICKER_YEARS {
            for objective in Objective::ALL {
                let methanol = table
                    .resolve(&RouteSelection::new(Chemical::Methanol, year, objective))
                    .expect("methanol");
                let hydrogen = table
                    .resolve(&RouteSelection::new(Chemical::Hydrogen, year, objective))
                    .expect("hydrogen");
                assert_eq!(methanol, hydrogen);
            }
        }
    }

    #[test]
    fn route_picker_rule_matches_year_and_objective() {
        let table = route_picker_table();
        let pick = |year, objective| {
            *table
                .resolve(&RouteSelection::new(Chemical::Methanol, year, objective))
                .expect("known selection")
        };
        assert_eq!(
            pick(PlanningYear::Y2030, Objective::MinimizeImpact),
            RecommendedRoute::Green
        );
        assert_eq!(
            pick(PlanningYear::Y2050, Objective::MinimizeImpact),
            RecommendedRoute::Biomethane
        );
        assert_eq!(
            pick(PlanningYear::Y2030, Objective::MinimizeCost),
            RecommendedRoute::Fossil
        );
        assert_eq!(
            pick(PlanningYear::Y2050, Objective::MinimizeCost),
            RecommendedRoute::Fossil
        );
    }

    #[test]
    fn route_picker_has_no_2040_entries() {
        let err = route_picker_table()
            .resolve(&RouteSelection::new(
                Chemical::Hydrogen,
                PlanningYear::Y2040,
                Objective::MinimizeCost,
            ))
            .expect_err("2040 is not offered by the picker");
        assert!(matches!(
            err,
            ScenarioError::UnsupportedCombination {
                table: ROUTE_PICKER_TABLE,
                ..
            }
        ));
    }
}
