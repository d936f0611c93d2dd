use super::super::Model;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };

    let is_fraud = result.prediction_label.is_fraud();

    html! {
        <div class={classes!("results-container", if is_fraud { "fraud" } else { "normal" })}>
            <div class="result-header">
                <h2>
                    {
                        if is_fraud {
                            html! { <><i class="fa-solid fa-triangle-exclamation"></i>{" Potential Fraud Detected"}</> }
                        } else {
                            html! { <><i class="fa-solid fa-circle-check"></i>{" Transaction Appears Safe"}</> }
                        }
                    }
                </h2>
                <div class="risk-badge">{ if is_fraud { "High Risk" } else { "Low Risk" } }</div>
            </div>
            <p class="result-note">
                {
                    if is_fraud {
                        "This transaction shows patterns consistent with fraudulent activity."
                    } else {
                        "This transaction appears to be legitimate based on our analysis."
                    }
                }
            </p>
            <p class="result-note">{ &result.message }</p>
        </div>
    }
}
