//! Generator UI state.
//!
//! The form is modelled as an immutable [`AppState`] snapshot. Events produce
//! a new snapshot plus, at most, one [`Effect`] for the caller to run; the
//! view is derived from a snapshot by the pure [`render`] function.

use serde::Serialize;

use crate::generate::{validate_prompt, DrawingStyle};

/// Suggested prompts offered under the text box.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "A Arca de Noé com os animais entrando",
    "Davi e Golias",
    "Daniel na cova dos leões",
    "O nascimento de Jesus na manjedoura",
];

/// Whether a generation request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Generating,
}

/// Inline message shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    EmptyPrompt,
    GenerationFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::EmptyPrompt => "Por favor, insira uma passagem ou tema bíblico.",
            Notice::GenerationFailed => {
                "Ocorreu um erro ao gerar a imagem. Por favor, tente novamente."
            }
        }
    }
}

/// Something the caller must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the generation service for an image.
    Generate { prompt: String, style: DrawingStyle },
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PromptChanged(String),
    ExampleChosen(String),
    StyleChanged(DrawingStyle),
    Submit,
    /// Carries the `data:` URL of the new image.
    GenerationSucceeded(String),
    GenerationFailed,
}

/// Snapshot of the generator form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    prompt: String,
    style: DrawingStyle,
    phase: Phase,
    image_url: Option<String>,
    notice: Option<Notice>,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: AppState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> DrawingStyle {
        self.style
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn is_generating(&self) -> bool {
        self.phase == Phase::Generating
    }

    /// Apply `event`, returning the next snapshot and any effect to run.
    ///
    /// Prompt edits and submits are ignored while a generation is running;
    /// generation results are ignored when none is running.
    pub fn apply(self, event: Event) -> Transition {
        match event {
            Event::PromptChanged(prompt) | Event::ExampleChosen(prompt) => {
                if self.is_generating() {
                    return Transition::to(self);
                }
                Transition::to(Self { prompt, ..self })
            }
            Event::StyleChanged(style) => Transition::to(Self { style, ..self }),
            Event::Submit => self.submit(),
            Event::GenerationSucceeded(url) => {
                if !self.is_generating() {
                    return Transition::to(self);
                }
                Transition::to(Self {
                    phase: Phase::Idle,
                    image_url: Some(url),
                    notice: None,
                    ..self
                })
            }
            Event::GenerationFailed => {
                if !self.is_generating() {
                    return Transition::to(self);
                }
                Transition::to(Self {
                    phase: Phase::Idle,
                    notice: Some(Notice::GenerationFailed),
                    ..self
                })
            }
        }
    }

    fn submit(self) -> Transition {
        if self.is_generating() {
            return Transition::to(self);
        }

        let Ok(prompt) = validate_prompt(&self.prompt).map(str::to_string) else {
            return Transition::to(Self {
                notice: Some(Notice::EmptyPrompt),
                ..self
            });
        };

        let effect = Effect::Generate {
            prompt,
            style: self.style,
        };
        Transition {
            state: Self {
                phase: Phase::Generating,
                image_url: None,
                notice: None,
                ..self
            },
            effect: Some(effect),
        }
    }
}

/// One entry of the style picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// What the result area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Content {
    Placeholder,
    Loading,
    Image { url: String, alt: String },
}

/// Everything needed to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub styles: Vec<StyleOption>,
    pub prompt: String,
    pub prompt_editable: bool,
    pub examples: Vec<&'static str>,
    pub generate_label: &'static str,
    pub generate_disabled: bool,
    pub notice: Option<&'static str>,
    pub content: Content,
    /// Print, share and download are offered only once an image exists.
    pub actions_enabled: bool,
}

/// Derive the view for a snapshot.
pub fn render(state: &AppState) -> View {
    let generating = state.is_generating();

    let content = match (&state.image_url, generating) {
        (_, true) => Content::Loading,
        (Some(url), false) => Content::Image {
            url: url.clone(),
            alt: state.prompt.clone(),
        },
        (None, false) => Content::Placeholder,
    };

    View {
        styles: DrawingStyle::ALL
            .iter()
            .map(|&style| StyleOption {
                id: style.id(),
                label: style.label(),
                selected: style == state.style,
            })
            .collect(),
        prompt: state.prompt.clone(),
        prompt_editable: !generating,
        examples: EXAMPLE_PROMPTS.to_vec(),
        generate_label: if generating {
            "Gerando Imagem..."
        } else {
            "✨ Gerar Desenho"
        },
        generate_disabled: generating,
        notice: state.notice.map(Notice::message),
        actions_enabled: matches!(content, Content::Image { .. }),
        content,
    }
}
