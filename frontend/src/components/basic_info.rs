use super::super::{Model, Msg, Step};
use super::utils::render_feature_input;
use shared::FeatureName;
use yew::prelude::*;

pub fn render_basic_info(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="basic-info">
            <div class="field-grid">
                { render_feature_input(model, link, FeatureName::Amount, "0.01", "Transaction amount".into()) }
                { render_feature_input(model, link, FeatureName::Time, "1", "Seconds elapsed".into()) }
            </div>
            <div class="actions">
                <button onclick={link.callback(|_| Msg::GoToStep(Step::TransactionDetails))}>
                    {"Next Step "}<i class="fa-solid fa-arrow-right"></i>
                </button>
            </div>
        </div>
    }
}
