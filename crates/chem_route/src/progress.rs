//! Fixed-length staging shown before results appear. It is an animation
//! only; nothing is computed while it runs.

use std::time::Duration;

pub const PROGRESS_STAGE_LABELS: [&str; 4] = [
    "Creating process simulation",
    "Optimizing process simulation",
    "Creating hybrid process models",
    "Optimizing supply chain",
];

pub const DEFAULT_STAGE_DURATION_MS: u64 = 1_010;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Running,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageView {
    pub label: &'static str,
    pub status: StageStatus,
}

impl StageView {
    pub fn display_text(&self) -> String {
        match self.status {
            StageStatus::Running => format!("{}...", self.label),
            StageStatus::Done => format!("{} ✅", self.label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Stages reached so far; later stages are not shown yet.
    pub stages: Vec<StageView>,
    /// Completion of the running stage in `0.0..=1.0`.
    pub stage_fraction: f32,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTimeline {
    stage_duration: Duration,
}

impl Default for ProgressTimeline {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_STAGE_DURATION_MS))
    }
}

impl ProgressTimeline {
    pub fn new(stage_duration: Duration) -> Self {
        Self { stage_duration }
    }

    pub fn stage_duration(&self) -> Duration {
        self.stage_duration
    }

    pub fn total_duration(&self) -> Duration {
        self.stage_duration * PROGRESS_STAGE_LABELS.len() as u32
    }

    pub fn snapshot(&self, elapsed: Duration) -> ProgressSnapshot {
        if self.stage_duration.is_zero() || elapsed >= self.total_duration() {
            return ProgressSnapshot {
                stages: PROGRESS_STAGE_LABELS
                    .into_iter()
                    .map(|label| StageView {
                        label,
                        status: StageStatus::Done,
                    })
                    .collect(),
                stage_fraction: 1.0,
                finished: true,
            };
        }

        let stage_nanos = self.stage_duration.as_nanos();
        let elapsed_nanos = elapsed.as_nanos();
        let running = (elapsed_nanos / stage_nanos) as usize;
        let stage_fraction = (elapsed_nanos % stage_nanos) as f64 / stage_nanos as f64;

        let stages = PROGRESS_STAGE_LABELS
            .into_iter()
            .take(running + 1)
            .enumerate()
            .map(|(index, label)| StageView {
                label,
                status: if index < running {
                    StageStatus::Done
                } else {
                    StageStatus::Running
                },
            })
            .collect();

        ProgressSnapshot {
            stages,
            stage_fraction: stage_fraction as f32,
            finished: false,
        }
    }
}
