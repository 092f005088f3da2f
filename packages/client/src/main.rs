use clap::{Args, Parser, Subcommand};
use learn_words_client::{AdminView, ApiClient, LearnView, DEFAULT_API_URL};
use learn_words_core::{Attempt, Language, Practice, Tags, WordDraft};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "learn-words", about = "Practice and maintain Learn Words vocabulary")]
struct Cli {
    /// Base URL of the Learn Words API
    #[arg(long, env = "LEARN_WORDS_API", default_value = DEFAULT_API_URL)]
    api: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Maintain the word list
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Practice translating words
    Learn {
        #[arg(long, default_value = "english")]
        from: Language,
        #[arg(long, default_value = "finnish")]
        to: Language,
        /// Only practice words carrying this tag
        #[arg(long, default_value = "")]
        tag: String,
    },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// List words, optionally filtered by tag
    List {
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// List the distinct tags
    Tags,
    /// Add a new word
    Add(WordFields),
    /// Edit a word; omitted fields keep their current value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: EditFields,
    },
    /// Delete a word
    Delete { id: i64 },
}

#[derive(Args)]
struct WordFields {
    #[arg(long)]
    english: String,
    #[arg(long)]
    finnish: String,
    #[arg(long)]
    swedish: String,
    #[arg(long, default_value = "")]
    tags: String,
}

#[derive(Args)]
struct EditFields {
    #[arg(long)]
    english: Option<String>,
    #[arg(long)]
    finnish: Option<String>,
    #[arg(long)]
    swedish: Option<String>,
    #[arg(long)]
    tags: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.api)?;

    match cli.command {
        Command::Admin(command) => run_admin(api, command).await,
        Command::Learn { from, to, tag } => run_learn(api, from, to, tag).await,
    }
}

async fn run_admin(api: ApiClient, command: AdminCommand) -> anyhow::Result<()> {
    let mut view = AdminView::new(api);
    view.refresh().await;

    let ok = match command {
        AdminCommand::List { tag } => {
            view.select_tag(tag);
            for word in view.visible_words() {
                println!(
                    "{:>4}  {} | {} | {}  [{}]",
                    word.id, word.english, word.finnish, word.swedish, word.tags
                );
            }
            true
        }
        AdminCommand::Tags => {
            for tag in view.tags() {
                println!("{tag}");
            }
            true
        }
        AdminCommand::Add(fields) => {
            let draft = WordDraft::new(fields.english, fields.finnish, fields.swedish, fields.tags);
            view.add_word(&draft).await
        }
        AdminCommand::Edit { id, fields } => {
            let Some(current) = view.find(id) else {
                anyhow::bail!("no word with id {id}");
            };
            let mut draft = current.to_draft();
            if let Some(english) = fields.english {
                draft.english = english;
            }
            if let Some(finnish) = fields.finnish {
                draft.finnish = finnish;
            }
            if let Some(swedish) = fields.swedish {
                draft.swedish = swedish;
            }
            if let Some(tags) = fields.tags {
                draft.tags = Tags::new(tags);
            }
            view.edit_word(id, &draft).await
        }
        AdminCommand::Delete { id } => view.delete_word(id).await,
    };

    if let Some(message) = view.error_message() {
        anyhow::bail!(message);
    }
    if ok {
        println!("{} words", view.words().len());
    }
    Ok(())
}

async fn run_learn(api: ApiClient, from: Language, to: Language, tag: String) -> anyhow::Result<()> {
    let mut view = LearnView::new(api);
    view.refresh().await;
    view.select_languages(from, to)?;
    view.select_tag(tag)?;

    let session = view.start(&mut rand::rng())?;
    if session.is_empty() {
        println!("Nothing to practice.");
        view.stop();
        return Ok(());
    }
    println!("Translate the words from {from} to {to}. Commands: :retry, :next (or empty line), :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let score = practice_loop(view.practice_mut(), &mut lines).await?;
    view.stop();

    println!("Words translated correctly on first try: {score}");
    Ok(())
}

/// Runs until `:quit` or end of input and returns the score.
async fn practice_loop(practice: &mut Practice, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<u32> {
    loop {
        let Some(session) = practice.session() else {
            return Ok(0);
        };
        let score = session.score();
        let checked = session.attempt().is_checked();

        if !checked {
            println!("Translate the word: {}", session.prompt().unwrap_or_default());
        }

        let Some(line) = lines.next_line().await? else {
            return Ok(score);
        };
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            ":quit" => return Ok(score),
            ":retry" => {
                if let Err(err) = practice.retry() {
                    println!("{err}");
                }
            }
            ":next" => {
                if let Err(err) = practice.advance() {
                    println!("{err}");
                }
            }
            "" if checked => {
                practice.advance()?;
            }
            answer => match practice.submit_answer(answer)? {
                Attempt::Correct => println!("Correct!"),
                _ => {
                    let expected = practice
                        .session()
                        .and_then(|session| session.expected_answer())
                        .unwrap_or_default();
                    println!("Incorrect! The correct translation is {expected}");
                }
            },
        }
    }
}
