use crate::hooks::use_experiments;
use shared::ExperimentSummary;
use yew::prelude::*;

/// Unit label for a run count ("1 run", "5 runs").
fn run_label(count: u64) -> &'static str {
    if count == 1 {
        "run"
    } else {
        "runs"
    }
}

/// Experiment card component
#[derive(Properties, PartialEq)]
struct ExperimentCardProps {
    experiment: ExperimentSummary,
}

#[function_component(ExperimentCard)]
fn experiment_card(props: &ExperimentCardProps) -> Html {
    let experiment = &props.experiment;

    let badge_class = if experiment.is_active() {
        "status-badge active"
    } else {
        "status-badge archived"
    };

    html! {
        <div class="experiment-card">
            <div class="card-header">
                <span class="experiment-name" title={experiment.name.clone()}>
                    { &experiment.name }
                </span>
                <span class={badge_class}>{ &experiment.lifecycle_stage }</span>
            </div>
            <div class="card-body">
                <div class="run-count">{ experiment.run_count }</div>
                <p class="run-label">{ run_label(experiment.run_count) }</p>
                <div class="experiment-id">
                    { format!("ID: {}", experiment.experiment_id) }
                </div>
            </div>
        </div>
    }
}

#[function_component(ExperimentsPage)]
pub fn experiments_page() -> Html {
    let state = use_experiments();

    if state.loading {
        return html! {
            <div class="page-status">
                <div class="spinner"></div>
                <p>{ "Loading experiments..." }</p>
            </div>
        };
    }

    if let Some(error) = &state.error {
        return html! {
            <div class="page-status">
                <p class="error-message">
                    { format!("Error loading experiments: {}", error) }
                </p>
            </div>
        };
    }

    if state.experiments.is_empty() {
        return html! {
            <div class="page-status">
                <p class="empty-state">
                    { "No experiments found. Start by creating an MLflow experiment." }
                </p>
            </div>
        };
    }

    html! {
        <div class="experiments-container">
            <header class="page-header">
                <h2>{ "Experiments" }</h2>
                <p class="page-description">
                    { "Overview of your MLflow experiments and their metrics" }
                </p>
            </header>

            <div class="experiment-grid">
                { for state.experiments.iter().map(|experiment| {
                    html! {
                        <ExperimentCard
                            key={experiment.experiment_id.clone()}
                            experiment={experiment.clone()}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
