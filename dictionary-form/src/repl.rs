use std::io::{self, BufRead, Write};

use crate::form::{DefinitionForm, RenderFragment};
use crate::render::fragment_text;

pub async fn run(form: &DefinitionForm) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(form, stdin.lock(), stdout.lock()).await
}

async fn run_with(
    form: &DefinitionForm,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, ">> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let mut command_parts = line.trim().split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "define" | "find" => {
                    let word = command_parts.collect::<Vec<&str>>().join(" ");
                    define_word(form, &word, &mut output).await?;
                }
                _ => {
                    writeln!(output, "Unknown command {command}.")?;
                }
            }
        }
    }
    Ok(())
}

pub async fn define_word(
    form: &DefinitionForm,
    word: &str,
    output: &mut impl Write,
) -> io::Result<()> {
    let fragment = form.on_submit(word).await;
    if let RenderFragment::Definitions(_) = fragment {
        writeln!(output, "Showing definition for '{}':", word.trim())?;
    }
    let text = fragment_text(&fragment);
    if !text.is_empty() {
        writeln!(output, "{}", text.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dictionary::mock::MockClient;
    use dictionary::Dictionary;

    use super::*;

    const RUN: &str = r#"[{"word":"run","meanings":[{"partOfSpeech":"verb","definitions":[{"definition":"move fast"}]}]}]"#;

    async fn session(client: &Arc<MockClient>, script: &str) -> String {
        let dictionary =
            Dictionary::with_client(client.clone(), Dictionary::default_base_url()).unwrap();
        let form = DefinitionForm::new(dictionary);
        let mut output = Vec::new();
        run_with(&form, script.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn define_prints_groups() {
        let client = Arc::new(MockClient::body(RUN));
        let output = session(&client, "define run\nquit\n").await;
        assert_eq!(
            output,
            ">> Showing definition for 'run':\n    verb:\n        move fast\n>> "
        );
    }

    #[tokio::test]
    async fn find_without_word_does_not_fetch() {
        let client = Arc::new(MockClient::body(RUN));
        session(&client, "find\n").await;
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_word_prints_message() {
        let client = Arc::new(MockClient::status(404));
        let output = session(&client, "find qwertyuiop\n").await;
        assert!(output.contains("Please try a different word"));
    }

    #[tokio::test]
    async fn unknown_command_is_reported() {
        let client = Arc::new(MockClient::body(RUN));
        let output = session(&client, "practice\ne\n").await;
        assert!(output.contains("Unknown command practice."));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn multi_word_queries_are_joined() {
        let client = Arc::new(MockClient::status(404));
        session(&client, "define ice   cream\n").await;
        assert_eq!(
            client.requests(),
            vec!["https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"]
        );
    }
}
