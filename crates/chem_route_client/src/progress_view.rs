use std::time::Instant;

use chem_route::{ProgressSnapshot, ProgressTimeline, StageStatus};
use eframe::egui;

/// Wall-clock anchor for one staged run. The stages are cosmetic: the
/// scenario is already resolved when the run starts.
#[derive(Debug, Clone, Copy)]
pub struct StagedRun {
    started_at: Instant,
    timeline: ProgressTimeline,
}

impl StagedRun {
    pub fn start(timeline: ProgressTimeline) -> Self {
        Self {
            started_at: Instant::now(),
            timeline,
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.timeline.snapshot(self.started_at.elapsed())
    }
}

/// Draws the stage list and, while running, a bar for the current stage.
pub fn render_progress(ui: &mut egui::Ui, snapshot: &ProgressSnapshot) {
    for stage in &snapshot.stages {
        let text = egui::RichText::new(stage.display_text()).strong();
        match stage.status {
            StageStatus::Done => ui.label(text),
            StageStatus::Running => ui.label(text.color(ui.visuals().weak_text_color())),
        };
    }

    if !snapshot.finished {
        ui.add(
            egui::ProgressBar::new(snapshot.stage_fraction)
                .desired_width(280.0)
                .show_percentage(),
        );
    }
}
