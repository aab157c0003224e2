use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::core::config::Settings;

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Domain events counted on top of the per-request HTTP metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuizEvent {
    QuestionCreated,
    QuestionDeleted,
    AttemptServed,
}

impl QuizEvent {
    const ALL: [QuizEvent; 3] =
        [QuizEvent::QuestionCreated, QuizEvent::QuestionDeleted, QuizEvent::AttemptServed];

    pub(crate) fn counter_name(self) -> &'static str {
        match self {
            QuizEvent::QuestionCreated => "questions_created_total",
            QuizEvent::QuestionDeleted => "questions_deleted_total",
            QuizEvent::AttemptServed => "quiz_attempts_served_total",
        }
    }

    fn description(self) -> &'static str {
        match self {
            QuizEvent::QuestionCreated => "Questions added to assessments",
            QuizEvent::QuestionDeleted => "Questions removed from assessments",
            QuizEvent::AttemptServed => "Shuffled question sets handed out",
        }
    }
}

/// Installs the Prometheus recorder once. Without it every counter is a no-op.
pub(crate) fn init(settings: &Settings) -> anyhow::Result<()> {
    if !settings.telemetry().prometheus_enabled || PROM_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = PROM_HANDLE.set(handle);

    for event in QuizEvent::ALL {
        ::metrics::describe_counter!(event.counter_name(), event.description());
    }
    Ok(())
}

pub(crate) fn record(event: QuizEvent) {
    ::metrics::counter!(event.counter_name()).increment(1);
}

pub(crate) fn render() -> Option<String> {
    PROM_HANDLE.get().map(|handle| handle.render())
}
