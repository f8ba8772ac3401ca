//! Generator form state binding.
//!
//! JavaScript owns the DOM; this wrapper owns the [`AppState`] snapshot. Every
//! user action is forwarded here, and the page redraws from [`App::view`].
//!
//! ```typescript
//! const app = new App();
//! app.set_prompt(textarea.value);
//! const job = app.submit();
//! if (job) {
//!   draw(app.view());
//!   try {
//!     app.generation_succeeded(await generator.generate(job.prompt, job.style));
//!   } catch {
//!     app.generation_failed();
//!   }
//! }
//! draw(app.view());
//! ```

use desenho_core::generate::DrawingStyle;
use desenho_core::state::{render, AppState, Effect, Event};
use wasm_bindgen::prelude::*;

/// A generation the page should start.
#[wasm_bindgen]
pub struct GenerationJob {
    prompt: String,
    style: DrawingStyle,
}

#[wasm_bindgen]
impl GenerationJob {
    #[wasm_bindgen(getter)]
    pub fn prompt(&self) -> String {
        self.prompt.clone()
    }

    /// Style id, e.g. `"coloring"`.
    #[wasm_bindgen(getter)]
    pub fn style(&self) -> String {
        self.style.id().to_string()
    }
}

/// The generator form.
#[wasm_bindgen]
#[derive(Default)]
pub struct App {
    state: AppState,
}

impl App {
    fn dispatch(&mut self, event: Event) -> Option<Effect> {
        let transition = std::mem::take(&mut self.state).apply(event);
        self.state = transition.state;
        transition.effect
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}

#[wasm_bindgen]
impl App {
    #[wasm_bindgen(constructor)]
    pub fn new() -> App {
        App::default()
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.dispatch(Event::PromptChanged(prompt));
    }

    pub fn choose_example(&mut self, prompt: String) {
        self.dispatch(Event::ExampleChosen(prompt));
    }

    /// Select a style by id; unknown ids select the coloring page.
    pub fn set_style(&mut self, style: &str) {
        self.dispatch(Event::StyleChanged(DrawingStyle::from_id(style)));
    }

    /// Submit the form. Returns the job to run, or `undefined` when the
    /// prompt is blank or a generation is already running.
    pub fn submit(&mut self) -> Option<GenerationJob> {
        match self.dispatch(Event::Submit)? {
            Effect::Generate { prompt, style } => Some(GenerationJob { prompt, style }),
        }
    }

    pub fn generation_succeeded(&mut self, image_url: String) {
        self.dispatch(Event::GenerationSucceeded(image_url));
    }

    pub fn generation_failed(&mut self) {
        self.dispatch(Event::GenerationFailed);
    }

    #[wasm_bindgen(getter)]
    pub fn is_generating(&self) -> bool {
        self.state.is_generating()
    }

    /// Current view model as a plain object.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&render(&self.state))?)
    }
}
