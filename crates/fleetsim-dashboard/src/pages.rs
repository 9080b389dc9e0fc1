//! Dashboard page handlers.
//!
//! Each handler builds view types and renders an Askama template. The
//! results page runs the simulation server-side; validation problems
//! render back into the form page with the message.

use askama::Template;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::response::Html;
use tracing::warn;

use fleetsim_core::{Geometric, SteadyStateEngine, SteadyStateRequest, validate};

use crate::views::SimulationView;

fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(
        tmpl.render()
            .unwrap_or_else(|e| format!("<pre>Template error: {e}</pre>")),
    )
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    view: SimulationView,
}

/// GET / — the simulation form.
pub async fn index() -> Html<String> {
    render(IndexTemplate { error: None })
}

/// GET /run — run a simulation and render the results.
pub async fn run(query: Result<Query<SteadyStateRequest>, QueryRejection>) -> Html<String> {
    let req = match query {
        Ok(Query(req)) => req,
        Err(e) => {
            warn!(error = %e, "rejected malformed form submission");
            return render(IndexTemplate { error: Some(format!("decode: {e}")) });
        }
    };

    if let Err(e) = validate(&req) {
        warn!(error = %e, "rejected out-of-range form submission");
        return render(IndexTemplate { error: Some(e.to_string()) });
    }

    let mut engine = SteadyStateEngine::new(Geometric::from_entropy());
    match engine.execute(&req) {
        Ok(resp) => render(ResultsTemplate { view: SimulationView::from_response(&resp) }),
        Err(e) => render(IndexTemplate { error: Some(e.to_string()) }),
    }
}
