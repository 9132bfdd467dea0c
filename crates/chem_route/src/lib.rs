pub mod catalog;
pub mod flow;
pub mod icons;
pub mod model;
pub mod progress;
pub mod resolver;

pub use catalog::{
    methanol_supply_chain_table, route_picker_table, MethanolSupplyChainTable,
    RoutePickerTable, METHANOL_SUPPLY_CHAIN_TABLE, ROUTE_PICKER_TABLE, ROUTE_PICKER_YEARS,
    SUPPLY_CHAIN_YEARS,
};
pub use flow::{FlowEdge, FlowNode, ProcessFlowGraph};
pub use icons::{select_icon_strip, IconEmphasis, IconStrip, SdgGoal, SdgIcon, ICON_STRIP_PRIORITY};
pub use model::{
    Chemical, Objective, PlanningYear, RecommendedRoute, Route, RouteKind, RouteSelection,
    Scenario, Site, SupplyChainSelection,
};
pub use progress::{
    ProgressSnapshot, ProgressTimeline, StageStatus, StageView, DEFAULT_STAGE_DURATION_MS,
    PROGRESS_STAGE_LABELS,
};
pub use resolver::{ScenarioError, ScenarioResolver, ScenarioTable};
