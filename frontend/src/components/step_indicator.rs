use super::super::Step;
use yew::prelude::*;

pub fn render_step_indicator(current: Step) -> Html {
    let dot = |step: Step| {
        html! {
            <div class={classes!("step-dot", (current >= step).then_some("active"))}>
                { step.number().to_string() }
            </div>
        }
    };

    html! {
        <>
            <div class="steps">
                { dot(Step::BasicInfo) }
                <div class={classes!("step-bar", (current > Step::BasicInfo).then_some("active"))}></div>
                { dot(Step::TransactionDetails) }
            </div>
            <div class="step-labels">
                <span>{"Basic Info"}</span>
                <span>{"Transaction Details"}</span>
            </div>
        </>
    }
}
