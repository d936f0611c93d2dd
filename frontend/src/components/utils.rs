use super::super::{Model, Msg};
use gloo_timers::callback::Timeout;
use shared::FeatureName;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// A labelled numeric input bound to one feature.
pub fn render_feature_input(
    model: &Model,
    link: &Scope<Model>,
    feature: FeatureName,
    step: &'static str,
    placeholder: String,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetFeature(feature, input.value())
    });

    html! {
        <div class="field">
            <label for={feature.name()}>{ feature.name() }</label>
            <input
                id={feature.name()}
                type="number"
                name={feature.name()}
                step={step}
                required=true
                placeholder={placeholder}
                value={model.inputs.get(feature).to_string()}
                {oninput}
            />
        </div>
    }
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p><strong>{"Error: "}</strong>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
