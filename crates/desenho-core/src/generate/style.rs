//! Drawing styles and their prompt templates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual style the generated image is asked to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingStyle {
    /// Black and white coloring-book page.
    #[default]
    Coloring,
    /// Colorful kawaii illustration.
    Cute,
    /// Painterly, dramatically lit illustration.
    Realistic,
    /// Flat vector art with a small palette.
    Minimalist,
}

impl DrawingStyle {
    /// Every style, in the order they are offered to the user.
    pub const ALL: [DrawingStyle; 4] = [
        DrawingStyle::Coloring,
        DrawingStyle::Cute,
        DrawingStyle::Realistic,
        DrawingStyle::Minimalist,
    ];

    /// Parse a style id. Unknown ids fall back to the coloring page.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "cute" => DrawingStyle::Cute,
            "realistic" => DrawingStyle::Realistic,
            "minimalist" => DrawingStyle::Minimalist,
            _ => DrawingStyle::Coloring,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            DrawingStyle::Coloring => "coloring",
            DrawingStyle::Cute => "cute",
            DrawingStyle::Realistic => "realistic",
            DrawingStyle::Minimalist => "minimalist",
        }
    }

    /// Name shown on the style picker.
    pub fn label(self) -> &'static str {
        match self {
            DrawingStyle::Coloring => "Página de Colorir",
            DrawingStyle::Cute => "Fofo (Kawaii)",
            DrawingStyle::Realistic => "Realista",
            DrawingStyle::Minimalist => "Minimalista",
        }
    }

    /// Full prompt sent to the image model, with `user_prompt` quoted inside.
    pub fn prompt(self, user_prompt: &str) -> String {
        match self {
            DrawingStyle::Cute => format!(
                "Crie uma ilustração digital colorida e vibrante no estilo 'fofo' (kawaii), ideal para crianças. \
                 A cena deve ter personagens com olhos grandes, bochechas rosadas e formas arredondadas. \
                 O cenário deve ser alegre e simples, com cores vivas. \
                 A cena deve ilustrar o seguinte tema bíblico: \"{user_prompt}\"."
            ),
            DrawingStyle::Realistic => format!(
                "Crie uma ilustração digital com um estilo 'realista' e artístico, quase como uma pintura clássica. \
                 A iluminação deve ser dramática, com sombras bem definidas para criar profundidade. \
                 As texturas (tecidos, pele, cenários) devem ser detalhadas. \
                 As expressões dos personagens devem ser emotivas e convincentes. \
                 A cena deve retratar a seguinte passagem bíblica: \"{user_prompt}\"."
            ),
            DrawingStyle::Minimalist => format!(
                "Crie uma ilustração vetorial 'minimalista' e moderna. \
                 Use linhas limpas, formas geométricas simples e uma paleta de cores limitada (2-3 cores harmoniosas). \
                 O foco deve ser no simbolismo e na clareza da mensagem, com bastante espaço negativo para um visual clean. \
                 A ilustração deve representar o seguinte conceito bíblico: \"{user_prompt}\"."
            ),
            DrawingStyle::Coloring => format!(
                "Crie uma página de livro de colorir em preto e branco, bonita, limpa e profissional para crianças. \
                 O estilo deve ser minimalista, fofo e amigável, com contornos bem definidos e espessos. \
                 A cena deve ilustrar a seguinte história ou tema bíblico: \"{user_prompt}\". \
                 As linhas devem ser claras, nítidas e bem definidas, perfeitas para colorir. \
                 Evite sombreamento, texturas complexas ou tons de cinza. \
                 A imagem deve ser estritamente em preto e branco. \
                 A composição deve ser simples e focada nos personagens ou na cena principal, adequada para crianças pequenas."
            ),
        }
    }
}

impl fmt::Display for DrawingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
