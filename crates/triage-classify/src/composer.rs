//! Suggested reply and rationale text for a classified email.

use triage_core::Category;

const MEETING_REPLY: &str = "Obrigado pelo seu email.

Recebi sua solicitação de reunião e vou verificar minha agenda. Retornarei em breve com minha disponibilidade.

Caso seja urgente, não hesite em entrar em contato por telefone.

Atenciosamente,
[Seu Nome]";

const PROJECT_REPLY: &str = "Obrigado pelo contato.

Recebi as informações sobre o projeto e vou analisar os detalhes fornecidos. Retornarei com um feedback detalhado em até 2 dias úteis.

Caso tenha alguma dúvida adicional, fique à vontade para entrar em contato.

Atenciosamente,
[Seu Nome]";

const GENERIC_REPLY: &str = "Obrigado pelo seu email.

Recebi sua mensagem e vou analisar as informações fornecidas. Retornarei com uma resposta detalhada em breve.

Caso seja urgente, não hesite em entrar em contato por telefone.

Atenciosamente,
[Seu Nome]";

const DECLINE_REPLY: &str = "Obrigado pelo contato.

No momento, não tenho interesse na proposta apresentada. Caso tenha algo mais específico relacionado ao meu trabalho, fique à vontade para entrar em contato novamente.

Para remover meu email de sua lista de contatos, responda com \"REMOVER\" no assunto.

Atenciosamente,
[Seu Nome]";

/// Placeholder cited when no productive keyword matched.
pub const PRODUCTIVE_PLACEHOLDER: &str = "termos relacionados a trabalho";
/// Placeholder cited when no unproductive keyword matched.
pub const UNPRODUCTIVE_PLACEHOLDER: &str = "termos promocionais";

/// Which reply template was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTemplate {
    Meeting,
    Project,
    Generic,
    Decline,
}

impl ReplyTemplate {
    /// Select the template. The meeting check runs before the project check.
    #[must_use]
    pub fn select(category: Category, content: &str) -> Self {
        if !category.is_productive() {
            return Self::Decline;
        }

        let lowered = content.to_lowercase();
        if lowered.contains("reunião") || lowered.contains("meeting") {
            Self::Meeting
        } else if lowered.contains("projeto") || lowered.contains("project") {
            Self::Project
        } else {
            Self::Generic
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Meeting => MEETING_REPLY,
            Self::Project => PROJECT_REPLY,
            Self::Generic => GENERIC_REPLY,
            Self::Decline => DECLINE_REPLY,
        }
    }
}

/// Reply and rationale produced for one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub suggested_response: String,
    pub reasoning: String,
}

/// Compose the suggested reply and the rationale.
///
/// `keywords` are the matched keywords of the winning category.
#[must_use]
pub fn compose(category: Category, content: &str, keywords: &[String]) -> Composition {
    Composition {
        suggested_response: ReplyTemplate::select(category, content).text().to_string(),
        reasoning: reasoning(category, keywords),
    }
}

fn reasoning(category: Category, keywords: &[String]) -> String {
    let (label, placeholder, summary) = match category {
        Category::Productive => (
            "PRODUTIVO",
            PRODUCTIVE_PLACEHOLDER,
            "A análise identificou termos associados a atividades profissionais, projetos, reuniões ou assuntos corporativos relevantes, indicando que este email requer atenção e resposta adequada.",
        ),
        Category::Unproductive => (
            "IMPRODUTIVO",
            UNPRODUCTIVE_PLACEHOLDER,
            "A análise identificou padrões típicos de emails promocionais, spam ou conteúdo não relacionado a atividades profissionais, sugerindo que pode ser tratado com menor prioridade.",
        ),
    };

    let cited = if keywords.is_empty() {
        placeholder.to_string()
    } else {
        keywords.join(", ")
    };

    format!(
        "Este email foi classificado como {label} baseado na análise de linguagem natural.\n\nPalavras-chave identificadas: {cited}\n\n{summary}"
    )
}
