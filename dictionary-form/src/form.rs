use dictionary::{Dictionary, MeaningGroup};

pub const FORM_ID: &str = "dictionary_form";
pub const OUTPUT_REGION_ID: &str = "definition-container";
pub const WORD_MAX_LENGTH: usize = 256;

/// Declarative description of the definition form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescriptor {
    pub id: &'static str,
    pub word: TextField,
    pub submit: SubmitAction,
    pub output_region: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub max_length: usize,
    pub size: usize,
    pub required: bool,
}

/// The submit button and the asynchronous update it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAction {
    pub label: &'static str,
    pub event: &'static str,
    /// Output region replaced by the response.
    pub target: &'static str,
    pub disable_refocus: bool,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub kind: ProgressKind,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKind {
    Throbber,
}

/// New content of the output region after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFragment {
    Empty,
    Definitions(Vec<MeaningGroup>),
    Message(String),
}

pub struct DefinitionForm {
    dictionary: Dictionary,
}

impl DefinitionForm {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn render(&self) -> FormDescriptor {
        FormDescriptor {
            id: FORM_ID,
            word: TextField {
                name: "word",
                title: "Word",
                description: "Enter a word to find its definition. Currently only English language is supported.",
                max_length: WORD_MAX_LENGTH,
                size: 10,
                required: true,
            },
            submit: SubmitAction {
                label: "Find definition",
                event: "click",
                target: OUTPUT_REGION_ID,
                disable_refocus: true,
                progress: Progress {
                    kind: ProgressKind::Throbber,
                    message: "Fetching definition ...",
                },
            },
            output_region: OUTPUT_REGION_ID,
        }
    }

    /// Handles a submission. The returned fragment replaces whatever the
    /// output region showed before.
    pub async fn on_submit(&self, word: &str) -> RenderFragment {
        let word = word.trim();
        if word.is_empty() {
            return RenderFragment::Empty;
        }
        let length = word.chars().count();
        if length > WORD_MAX_LENGTH {
            tracing::debug!(length, "rejecting over-long word");
            return RenderFragment::Message(format!(
                "Word cannot be longer than {WORD_MAX_LENGTH} characters but is currently {length} characters long."
            ));
        }
        match self.dictionary.lookup(word).await {
            Ok(groups) => RenderFragment::Definitions(groups),
            Err(error) => RenderFragment::Message(error.to_string()),
        }
    }
}
