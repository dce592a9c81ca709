use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use ideabook::config::IdeabookConfig;
use ideabook::error::ServiceError;
use ideabook::model::Idea;
use ideabook::notifier::ErrorPrompt;
use ideabook::presenter::{EditPresenter, EditSignal, ListPresenter};
use ideabook::service::IdeaService;
use ideabook::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

enum CliError {
    /// A presenter routed a failure to the notifier; render its prompt.
    Prompt(ErrorPrompt),
    /// Bad input at the shell itself (e.g. a position past the listing).
    Usage(String),
}

fn main() {
    if let Err(e) = run() {
        match e {
            CliError::Prompt(prompt) => eprintln!(
                "{} {}",
                format!("{}:", prompt.title).red().bold(),
                prompt.message.red()
            ),
            CliError::Usage(msg) => eprintln!("{}", format!("Error: {}", msg).red()),
        }
        std::process::exit(1);
    }
}

struct AppContext {
    service: IdeaService<FileStore>,
    config: IdeabookConfig,
    data_dir: PathBuf,
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let mut ctx = init_context();

    match cli.command {
        Some(Commands::Add { title, description }) => handle_add(&mut ctx, title, description),
        Some(Commands::Show { position }) => handle_show(&mut ctx, position),
        Some(Commands::Edit {
            position,
            title,
            description,
        }) => handle_edit(&mut ctx, position, title, description),
        Some(Commands::Delete { position }) => handle_delete(&mut ctx, position),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::List) | None => handle_list(&mut ctx),
    }
}

fn data_dir() -> PathBuf {
    // IDEABOOK_HOME overrides the platform data dir (integration tests rely
    // on this).
    if let Ok(home) = std::env::var("IDEABOOK_HOME") {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }

    let proj_dirs =
        ProjectDirs::from("com", "ideabook", "ideabook").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn init_context() -> AppContext {
    let data_dir = data_dir();
    let config = IdeabookConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());

    AppContext {
        service: IdeaService::new(store),
        config,
        data_dir,
    }
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    let mut presenter = ListPresenter::new();
    presenter.refresh(&ctx.service);
    surface(presenter.take_error_prompt())?;

    presenter.draft_title = title.unwrap_or_default();
    presenter.draft_description = description.unwrap_or_default();
    let shown_title = presenter.draft_title.clone();

    presenter.submit_new_idea(&mut ctx.service);
    surface(presenter.take_error_prompt())?;

    println!("{}", format!("Idea added: {}", shown_title).green());
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<(), CliError> {
    let mut presenter = ListPresenter::new();
    presenter.refresh(&ctx.service);
    surface(presenter.take_error_prompt())?;

    print_ideas(presenter.rows(), &ctx.config);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, position: usize) -> Result<(), CliError> {
    let mut presenter = ListPresenter::new();
    presenter.refresh(&ctx.service);
    surface(presenter.take_error_prompt())?;

    let idx = resolve_position(presenter.rows(), position)?;
    let id = presenter.rows()[idx].id;
    let idea = ctx
        .service
        .read(id)
        .map_err(|e| CliError::Prompt(ErrorPrompt::display_error(&e)))?;

    print_full_idea(&idea);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    position: usize,
    title: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    if title.is_none() && description.is_none() {
        return Err(CliError::Usage(
            "nothing to change (pass --title and/or --description)".to_string(),
        ));
    }

    let mut presenter = ListPresenter::new();
    presenter.refresh(&ctx.service);
    surface(presenter.take_error_prompt())?;

    let idx = resolve_position(presenter.rows(), position)?;
    let idea = presenter.rows()[idx].clone();

    let mut editor = EditPresenter::new(&idea);
    if let Some(t) = title {
        editor.draft_title = t;
    }
    if let Some(d) = description {
        editor.draft_description = d;
    }

    match editor.submit_update(&mut ctx.service) {
        EditSignal::Dismiss => {
            println!(
                "{}",
                format!("Idea updated: {}", editor.draft_title).green()
            );
            Ok(())
        }
        EditSignal::Stay => Err(prompt_failure(editor.take_error_prompt())),
    }
}

fn handle_delete(ctx: &mut AppContext, position: usize) -> Result<(), CliError> {
    let mut presenter = ListPresenter::new();
    presenter.refresh(&ctx.service);
    surface(presenter.take_error_prompt())?;

    let idx = resolve_position(presenter.rows(), position)?;
    let title = presenter.rows()[idx].title.clone();

    presenter.delete_at(&mut ctx.service, idx);
    surface(presenter.take_error_prompt())?;

    println!("{}", format!("Idea deleted: {}", title).green());
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<(), CliError> {
    match (key.as_deref(), value) {
        (None, _) | (Some("show-descriptions"), None) => {
            println!("show-descriptions = {}", ctx.config.show_descriptions);
            Ok(())
        }
        (Some("show-descriptions"), Some(v)) => {
            let parsed: bool = v
                .parse()
                .map_err(|_| CliError::Usage(format!("expected true or false, got '{}'", v)))?;
            ctx.config.show_descriptions = parsed;
            ctx.config
                .save(&ctx.data_dir)
                .map_err(|e| CliError::Prompt(ErrorPrompt::display_error(&ServiceError::from(e))))?;
            println!("show-descriptions = {}", ctx.config.show_descriptions);
            Ok(())
        }
        (Some(other), _) => Err(CliError::Usage(format!("unknown config key: {}", other))),
    }
}

/// Turns a routed error prompt into a shell failure, if one is visible.
fn surface(prompt: Option<ErrorPrompt>) -> Result<(), CliError> {
    match prompt {
        Some(p) => Err(CliError::Prompt(p)),
        None => Ok(()),
    }
}

fn prompt_failure(prompt: Option<ErrorPrompt>) -> CliError {
    match prompt {
        Some(p) => CliError::Prompt(p),
        None => CliError::Usage("the operation failed".to_string()),
    }
}

/// Maps a 1-based user position onto the rendered listing. Validated here so
/// the presenter's stricter delete contract is never violated by user input.
fn resolve_position(rows: &[Idea], position: usize) -> Result<usize, CliError> {
    if position == 0 || position > rows.len() {
        return Err(CliError::Usage(format!("no idea at position {}", position)));
    }
    Ok(position - 1)
}

const LINE_WIDTH: usize = 100;

fn print_ideas(ideas: &[Idea], config: &IdeabookConfig) {
    if ideas.is_empty() {
        println!("No ideas yet.");
        return;
    }

    for (i, idea) in ideas.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);

        if config.show_descriptions && !idea.description.is_empty() {
            let flat: String = idea
                .description
                .chars()
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            let available =
                LINE_WIDTH.saturating_sub(idx_str.width() + idea.title.width() + 1);
            let preview = truncate_to_width(&flat, available);
            println!("{}{} {}", idx_str, idea.title.bold(), preview.dimmed());
        } else {
            println!("{}{}", idx_str, idea.title.bold());
        }
    }
}

fn print_full_idea(idea: &Idea) {
    println!("{}", idea.title.bold());
    println!("--------------------------------");
    println!("{}", idea.description);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
