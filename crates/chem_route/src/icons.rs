//! Sustainable Development Goal icon strips.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::RouteKind;

use self::SdgGoal::{CleanWater, ClimateAction, GoodHealth, LifeBelowWater, LifeOnLand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SdgGoal {
    GoodHealth,
    CleanWater,
    ClimateAction,
    LifeBelowWater,
    LifeOnLand,
}

impl SdgGoal {
    pub const ALL: [Self; 5] = [
        Self::GoodHealth,
        Self::CleanWater,
        Self::ClimateAction,
        Self::LifeBelowWater,
        Self::LifeOnLand,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::GoodHealth => 3,
            Self::CleanWater => 6,
            Self::ClimateAction => 13,
            Self::LifeBelowWater => 14,
            Self::LifeOnLand => 15,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::GoodHealth => "Good Health and Well-being",
            Self::CleanWater => "Clean Water and Sanitation",
            Self::ClimateAction => "Climate Action",
            Self::LifeBelowWater => "Life Below Water",
            Self::LifeOnLand => "Life on Land",
        }
    }

    /// Official UN tile color as `0xRRGGBB`.
    pub fn brand_rgb(self) -> u32 {
        match self {
            Self::GoodHealth => 0x4C9F38,
            Self::CleanWater => 0x26BDE2,
            Self::ClimateAction => 0x3F7E44,
            Self::LifeBelowWater => 0x0A97D9,
            Self::LifeOnLand => 0x56C02B,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconEmphasis {
    Highlighted,
    Dimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SdgIcon {
    pub goal: SdgGoal,
    pub emphasis: IconEmphasis,
}

impl SdgIcon {
    pub const fn highlighted(goal: SdgGoal) -> Self {
        Self {
            goal,
            emphasis: IconEmphasis::Highlighted,
        }
    }

    pub const fn dimmed(goal: SdgGoal) -> Self {
        Self {
            goal,
            emphasis: IconEmphasis::Dimmed,
        }
    }

    pub fn is_highlighted(self) -> bool {
        self.emphasis == IconEmphasis::Highlighted
    }

    /// Logical asset name, e.g. `sdg13` or `sdg13_dim`.
    pub fn asset_name(self) -> String {
        match self.emphasis {
            IconEmphasis::Highlighted => format!("sdg{}", self.goal.number()),
            IconEmphasis::Dimmed => format!("sdg{}_dim", self.goal.number()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStrip {
    pub trigger: RouteKind,
    pub icons: [SdgIcon; 5],
}

/// First entry whose trigger route is present wins.
pub const ICON_STRIP_PRIORITY: [IconStrip; 3] = [
    IconStrip {
        trigger: RouteKind::Fossil,
        icons: [
            SdgIcon::dimmed(GoodHealth),
            SdgIcon::dimmed(CleanWater),
            SdgIcon::dimmed(ClimateAction),
            SdgIcon::highlighted(LifeBelowWater),
            SdgIcon::dimmed(LifeOnLand),
        ],
    },
    IconStrip {
        trigger: RouteKind::Electrolytic,
        icons: [
            SdgIcon::dimmed(GoodHealth),
            SdgIcon::dimmed(CleanWater),
            SdgIcon::highlighted(ClimateAction),
            SdgIcon::dimmed(LifeBelowWater),
            SdgIcon::dimmed(LifeOnLand),
        ],
    },
    IconStrip {
        trigger: RouteKind::Biomethane,
        icons: [
            SdgIcon::dimmed(GoodHealth),
            SdgIcon::highlighted(CleanWater),
            SdgIcon::highlighted(ClimateAction),
            SdgIcon::dimmed(LifeBelowWater),
            SdgIcon::dimmed(LifeOnLand),
        ],
    },
];

pub fn select_icon_strip(present: &BTreeSet<RouteKind>) -> Option<&'static IconStrip> {
    ICON_STRIP_PRIORITY
        .iter()
        .find(|strip| present.contains(&strip.trigger))
}
