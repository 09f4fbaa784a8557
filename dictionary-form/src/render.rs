use askama::Template;
use dictionary::{LookupError, MeaningGroup};

use crate::form::{FormDescriptor, ProgressKind, RenderFragment};

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Dictionary</title>
    <style>
      .throbber { margin-left: 0.5em; font-style: italic; }
      .definition-part-of-speech { margin-top: 1em; }
      .definition-value-item { margin-left: 1.5em; }
    </style>
  </head>
  <body>
    <form id="{{ form.id }}" method="post" action="{{ action }}">
      <label for="edit-{{ form.word.name }}">{{ form.word.title }}</label>
      <input type="text" id="edit-{{ form.word.name }}" name="{{ form.word.name }}" maxlength="{{ form.word.max_length }}" size="{{ form.word.size }}"{% if form.word.required %} required{% endif %}>
      <div class="description">{{ form.word.description }}</div>
      <button type="submit" id="edit-find-word">{{ form.submit.label }}</button>
      <span id="{{ form.id }}-progress" class="{{ progress_class }}" hidden>{{ form.submit.progress.message }}</span>
      <div id="{{ form.output_region }}"></div>
    </form>
    <script>
      (() => {
        const form = document.getElementById('{{ form.id }}');
        const button = document.getElementById('edit-find-word');
        const input = document.getElementById('edit-{{ form.word.name }}');
        const progress = document.getElementById('{{ form.id }}-progress');
        button.addEventListener('{{ form.submit.event }}', async (event) => {
          event.preventDefault();
          if (!form.reportValidity()) {
            return;
          }
          progress.hidden = false;
          button.disabled = true;
          try {
            const response = await fetch(form.action, {
              method: 'POST',
              body: new URLSearchParams(new FormData(form)),
            });
            const region = document.getElementById('{{ form.submit.target }}');
            if (response.ok) {
              region.outerHTML = await response.text();
            } else {
              region.textContent = '{{ failure_message }}';
            }
          } finally {
            progress.hidden = true;
            button.disabled = false;
            {% if !form.submit.disable_refocus %}input.focus();{% endif %}
          }
        });
      })();
    </script>
  </body>
</html>"#,
    ext = "html"
)]
struct PageTemplate<'a> {
    form: &'a FormDescriptor,
    action: &'a str,
    progress_class: &'static str,
    failure_message: String,
}

#[derive(Template)]
#[template(
    source = r#"<div id="{{ region }}">
{%- for group in groups %}
  <div class="definition-row">
    <div class="definition-part-of-speech"><strong><em>{{ group.part_of_speech }}</em></strong></div>
    <div class="definition-values">
    {%- for definition in group.definitions %}
      <div class="definition-value-item">{{ definition }}</div>
    {%- endfor %}
    </div>
    <hr/><br/>
  </div>
{%- endfor %}
{{- message -}}
</div>"#,
    ext = "html"
)]
struct FragmentTemplate<'a> {
    region: &'a str,
    groups: &'a [MeaningGroup],
    message: &'a str,
}

/// Full HTML page for `form`, posting submissions to `action`.
pub fn page(form: &FormDescriptor, action: &str) -> askama::Result<String> {
    let progress_class = match form.submit.progress.kind {
        ProgressKind::Throbber => "throbber",
    };
    PageTemplate {
        form,
        action,
        progress_class,
        failure_message: LookupError::Unavailable.to_string(),
    }
    .render()
}

/// Markup replacing the output region `region`.
pub fn fragment_markup(fragment: &RenderFragment, region: &str) -> askama::Result<String> {
    let no_groups: &[MeaningGroup] = &[];
    let (groups, message) = match fragment {
        RenderFragment::Empty => (no_groups, ""),
        RenderFragment::Definitions(groups) => (groups.as_slice(), ""),
        RenderFragment::Message(message) => (no_groups, message.as_str()),
    };
    FragmentTemplate {
        region,
        groups,
        message,
    }
    .render()
}

/// Plain text rendering for the terminal.
pub fn fragment_text(fragment: &RenderFragment) -> String {
    let mut out = String::new();
    match fragment {
        RenderFragment::Empty => {}
        RenderFragment::Message(message) => out.push_str(message),
        RenderFragment::Definitions(groups) => {
            for group in groups {
                out.push_str(&format!("    {}:\n", group.part_of_speech));
                for definition in &group.definitions {
                    out.push_str(&format!("        {definition}\n"));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DefinitionForm, OUTPUT_REGION_ID};

    fn groups() -> Vec<MeaningGroup> {
        vec![
            MeaningGroup {
                part_of_speech: "verb".to_string(),
                definitions: vec!["move fast".to_string(), "operate".to_string()],
            },
            MeaningGroup {
                part_of_speech: "noun".to_string(),
                definitions: vec!["an act of running".to_string()],
            },
        ]
    }

    #[test]
    fn empty_fragment_is_empty_container() {
        let html = fragment_markup(&RenderFragment::Empty, OUTPUT_REGION_ID).unwrap();
        assert_eq!(html, r#"<div id="definition-container"></div>"#);
    }

    #[test]
    fn message_fragment_is_text_in_container() {
        let fragment = RenderFragment::Message("Unable to find a definition".to_string());
        let html = fragment_markup(&fragment, OUTPUT_REGION_ID).unwrap();
        assert_eq!(
            html,
            r#"<div id="definition-container">Unable to find a definition</div>"#
        );
    }

    #[test]
    fn definitions_render_one_row_per_group() {
        let html =
            fragment_markup(&RenderFragment::Definitions(groups()), OUTPUT_REGION_ID).unwrap();
        assert!(html.starts_with(r#"<div id="definition-container">"#));
        assert_eq!(html.matches(r#"class="definition-row""#).count(), 2);
        assert_eq!(html.matches(r#"class="definition-value-item""#).count(), 3);
        assert_eq!(html.matches("<hr/><br/>").count(), 2);
        assert!(html.contains("<strong><em>verb</em></strong>"));

        let verb = html.find("verb").unwrap();
        let noun = html.find("noun").unwrap();
        let fast = html.find("move fast").unwrap();
        let operate = html.find("operate").unwrap();
        assert!(verb < fast && fast < operate && operate < noun);
    }

    #[test]
    fn definitions_are_escaped() {
        let fragment = RenderFragment::Definitions(vec![MeaningGroup {
            part_of_speech: "<b>noun</b>".to_string(),
            definitions: vec!["<script>alert(1)</script>".to_string()],
        }]);
        let html = fragment_markup(&fragment, OUTPUT_REGION_ID).unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn page_contains_form_controls() {
        let form = DefinitionForm::new(dictionary::Dictionary::new()).render();
        let html = page(&form, "/definition").unwrap();
        assert!(html.contains(r#"<form id="dictionary_form""#));
        assert!(html.contains(r#"maxlength="256""#));
        assert!(html.contains(" required>"));
        assert!(html.contains("Find definition"));
        assert!(html.contains("Fetching definition ..."));
        assert!(html.contains(r#"<div id="definition-container"></div>"#));
        assert!(!html.contains("input.focus()"));
    }

    #[test]
    fn page_only_swaps_region_on_success() {
        let form = DefinitionForm::new(dictionary::Dictionary::new()).render();
        let html = page(&form, "/definition").unwrap();
        let guard = html.find("if (response.ok)").unwrap();
        let swap = html.find("region.outerHTML").unwrap();
        assert!(guard < swap);
        assert!(html.contains(
            "region.textContent = 'An error occurred trying to find a definition for the given word. Please try again later.'"
        ));
    }

    #[test]
    fn text_lists_groups_and_definitions() {
        let text = fragment_text(&RenderFragment::Definitions(groups()));
        assert_eq!(
            text,
            "    verb:\n        move fast\n        operate\n    noun:\n        an act of running\n"
        );
        assert_eq!(fragment_text(&RenderFragment::Empty), "");
        assert_eq!(
            fragment_text(&RenderFragment::Message("try again".to_string())),
            "try again"
        );
    }
}
