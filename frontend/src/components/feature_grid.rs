use super::super::{Model, Msg, Step};
use super::utils::{debounce, render_feature_input};
use shared::required_features;
use yew::prelude::*;

/// Inputs for the anonymised components `V1..V28`.
pub fn render_feature_grid(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let submit = debounce(300, {
        let link = link.clone();
        move || link.send_message(Msg::Submit)
    });

    html! {
        <div class="transaction-details">
            <div class="field-grid components">
                { for required_features().filter(|f| f.is_component()).map(|feature| {
                    render_feature_input(model, link, feature, "0.000001", feature.to_string())
                })}
            </div>
            <div class="actions">
                <button class="outline" onclick={link.callback(|_| Msg::GoToStep(Step::BasicInfo))}>
                    {"Back"}
                </button>
                <button onclick={submit} disabled={model.loading}>
                    {
                        if model.loading {
                            html! { <><i class="fa-solid fa-rotate fa-spin"></i>{" Analyzing"}</> }
                        } else {
                            html! { <><i class="fa-solid fa-shield-halved"></i>{" Analyze Transaction"}</> }
                        }
                    }
                </button>
            </div>
        </div>
    }
}
