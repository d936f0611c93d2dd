mod api;
mod components;
mod form;

use components::basic_info::render_basic_info;
use components::feature_grid::render_feature_grid;
use components::header::render_header;
use components::results::render_results;
use components::step_indicator::render_step_indicator;
use components::utils::render_error_message;
use form::FormInputs;
use shared::{FeatureName, PredictionResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Step {
    BasicInfo,
    TransactionDetails,
}

impl Step {
    fn number(self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::TransactionDetails => 2,
        }
    }
}

enum Msg {
    // Form
    SetFeature(FeatureName, String),
    GoToStep(Step),

    // Analysis
    Submit,
    PredictionReceived(PredictionResponse),

    // UI states
    SetError(Option<String>),
}

struct Model {
    step: Step,
    inputs: FormInputs,
    loading: bool,
    result: Option<PredictionResponse>,
    error: Option<String>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            step: Step::BasicInfo,
            inputs: FormInputs::default(),
            loading: false,
            result: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFeature(feature, value) => {
                self.inputs.set(feature, value);
                false
            }
            Msg::GoToStep(step) => {
                self.step = step;
                true
            }
            Msg::Submit => self.handle_submit(ctx),
            Msg::PredictionReceived(response) => {
                log::info!("Prediction received: {:?}", response.prediction_label);
                self.result = Some(response);
                self.loading = false;
                true
            }
            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_step_indicator(self.step) }
                    {
                        match self.step {
                            Step::BasicInfo => render_basic_info(self, ctx),
                            Step::TransactionDetails => render_feature_grid(self, ctx),
                        }
                    }
                    { render_error_message(self) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Fraud Detection | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

impl Model {
    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        if self.loading {
            return false;
        }

        self.loading = true;
        self.error = None;
        self.result = None;

        let record = self.inputs.to_record();
        log::debug!("Submitting {} of the required features", record.len());

        let link = ctx.link().clone();
        spawn_local(async move {
            match api::request_prediction(&record).await {
                Ok(response) => link.send_message(Msg::PredictionReceived(response)),
                Err(error) => link.send_message(Msg::SetError(Some(error))),
            }
        });

        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Model>::new().render();
}
