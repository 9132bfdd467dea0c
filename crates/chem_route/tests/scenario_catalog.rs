use std::collections::BTreeSet;

use chem_route::{
    methanol_supply_chain_table, select_icon_strip, Objective, PlanningYear, ProcessFlowGraph,
    RouteKind, Scenario, ScenarioError, ScenarioResolver, SupplyChainSelection,
    SUPPLY_CHAIN_YEARS,
};

fn resolve(year: PlanningYear, objective: Objective) -> &'static Scenario {
    methanol_supply_chain_table()
        .expect("table builds")
        .resolve(&SupplyChainSelection::new(year, objective))
        .expect("supported selection")
}

fn export_flags(scenario: &Scenario, kind: RouteKind) -> Vec<bool> {
    scenario
        .route(kind)
        .expect("route present")
        .sites
        .iter()
        .map(|site| site.is_export)
        .collect()
}

#[test]
fn every_selection_resolves_to_a_consistent_route_set() {
    let universe: BTreeSet<_> = RouteKind::ALL.into_iter().collect();
    for year in SUPPLY_CHAIN_YEARS {
        for objective in Objective::ALL {
            let scenario = resolve(year, objective);
            let kinds = scenario.kinds();
            assert!(!kinds.is_empty(), "{year} {objective}");
            assert!(kinds.is_subset(&universe));
            assert!(
                !(kinds.contains(&RouteKind::Electrolytic) && kinds.contains(&RouteKind::Fossil)),
                "{year} {objective} mixes electrolytic and fossil"
            );
            match objective {
                Objective::MinimizeCost => assert!(!kinds.contains(&RouteKind::Electrolytic)),
                Objective::MinimizeImpact => assert!(!kinds.contains(&RouteKind::Fossil)),
            }
        }
    }
}

#[test]
fn impact_2030_matches_published_sites() {
    let scenario = resolve(PlanningYear::Y2030, Objective::MinimizeImpact);
    assert_eq!(scenario.route_summary(), "Electrolytic, Biomethane");

    // Canada, Chile*, Netherlands*, Sweden
    assert_eq!(
        export_flags(scenario, RouteKind::Electrolytic),
        vec![false, true, true, false]
    );
    let chile = &scenario.route(RouteKind::Electrolytic).expect("electrolytic").sites[1];
    assert!((chile.lat - -53.1638).abs() < 1e-9);
    assert!((chile.lon - -70.9171).abs() < 1e-9);

    // Brazil*, India
    assert_eq!(export_flags(scenario, RouteKind::Biomethane), vec![true, false]);
    assert_eq!(scenario.route(RouteKind::Biomethane).expect("bio").color, "blue");
}

#[test]
fn impact_2050_shifts_weight_to_biomethane() {
    let scenario = resolve(PlanningYear::Y2050, Objective::MinimizeImpact);
    // Chile*, Netherlands
    assert_eq!(export_flags(scenario, RouteKind::Electrolytic), vec![true, false]);
    // Brazil*, India, China*, Australia
    assert_eq!(
        export_flags(scenario, RouteKind::Biomethane),
        vec![true, false, true, false]
    );
}

#[test]
fn cost_2040_uses_fossil_and_single_biomethane_site() {
    let scenario = resolve(PlanningYear::Y2040, Objective::MinimizeCost);
    assert_eq!(scenario.route_summary(), "Fossil, Biomethane");
    // US*, China, India, Egypt*
    assert_eq!(
        export_flags(scenario, RouteKind::Fossil),
        vec![true, false, false, true]
    );
    assert_eq!(export_flags(scenario, RouteKind::Biomethane), vec![true]);
    assert_eq!(scenario.route(RouteKind::Fossil).expect("fossil").color, "#404040");
}

#[test]
fn cost_2050_matches_published_sites() {
    let scenario = resolve(PlanningYear::Y2050, Objective::MinimizeCost);
    let fossil = scenario.route(RouteKind::Fossil).expect("fossil");
    assert_eq!(fossil.sites.len(), 2);
    assert!((fossil.sites[0].lat - 28.8880).abs() < 1e-9);
    assert!((fossil.sites[0].lon - -96.0035).abs() < 1e-9);
    assert!(fossil.sites[0].is_export);
    assert!((fossil.sites[1].lon - 107.7657).abs() < 1e-9);
    assert!(!fossil.sites[1].is_export);
    assert_eq!(export_flags(scenario, RouteKind::Biomethane), vec![true, false]);
}

#[test]
fn flow_edge_counts_follow_route_set() {
    let impact = ProcessFlowGraph::from_scenario(resolve(
        PlanningYear::Y2030,
        Objective::MinimizeImpact,
    ));
    assert_eq!(impact.edges().len(), 3);

    let cost = ProcessFlowGraph::from_scenario(resolve(PlanningYear::Y2050, Objective::MinimizeCost));
    assert_eq!(cost.edges().len(), 4);
}

#[test]
fn cost_scenarios_always_pick_fossil_icons() {
    for year in SUPPLY_CHAIN_YEARS {
        let scenario = resolve(year, Objective::MinimizeCost);
        let strip = select_icon_strip(&scenario.kinds()).expect("strip");
        assert_eq!(strip.trigger, RouteKind::Fossil);
    }
}

#[test]
fn resolving_twice_yields_identical_scenarios() {
    for year in SUPPLY_CHAIN_YEARS {
        for objective in Objective::ALL {
            let first = resolve(year, objective).clone();
            let second = resolve(year, objective).clone();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn scenario_json_carries_blank_site_names() {
    let scenario = resolve(PlanningYear::Y2050, Objective::MinimizeCost);
    let value = serde_json::to_value(scenario).expect("serialize");
    let routes = value["routes"].as_array().expect("routes array");
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["kind"], "Fossil");
    assert_eq!(routes[0]["sites"][0]["name"], "");
    assert_eq!(routes[0]["sites"][0]["is_export"], true);
}

#[test]
fn unsupported_error_names_table_and_selection() {
    let err = ScenarioError::UnsupportedCombination {
        table: "methanol_supply_chain",
        selection: SupplyChainSelection::new(PlanningYear::Y2030, Objective::MinimizeCost)
            .to_string(),
    };
    assert_eq!(
        err.to_string(),
        "unsupported combination in methanol_supply_chain: 2030 / Minimize Cost"
    );
}
