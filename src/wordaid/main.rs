use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use wordaid::api::{
    CmdMessage, ConfigAction, ListedWord, MessageLevel, VocabStats, WordAidApi, WordAidPaths,
    WordPatch,
};
use wordaid::config::WordAidConfig;
use wordaid::error::{Result, WordAidError};
use wordaid::model::WordForm;
use wordaid::speech;
use wordaid::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

struct AppContext {
    api: WordAidApi<FileStore>,
    speech_lang: String,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            english,
            japanese,
            pronunciation,
            example,
        }) => handle_add(&mut ctx, english, japanese, pronunciation, example),
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::View { positions }) => handle_view(&mut ctx, positions),
        Some(Commands::Edit {
            position,
            english,
            japanese,
            pronunciation,
            example,
        }) => handle_edit(&mut ctx, position, english, japanese, pronunciation, example),
        Some(Commands::Delete { positions }) => handle_delete(&mut ctx, positions),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term),
        Some(Commands::Say { position }) => handle_say(&mut ctx, position),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    // WORDAID_HOME overrides the platform data dir, mainly for tests
    let data_dir = match std::env::var_os("WORDAID_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "wordaid", "wordaid")
            .ok_or_else(|| WordAidError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = WordAidConfig::load(&data_dir).unwrap_or_default();
    let speech_lang = config.get_speech_lang().to_string();

    let store = FileStore::new(data_dir.clone());
    let paths = WordAidPaths { data_dir };
    let mut api = WordAidApi::new(store, paths);
    api.initialize()?;

    Ok(AppContext { api, speech_lang })
}

fn handle_add(
    ctx: &mut AppContext,
    english: String,
    japanese: String,
    pronunciation: Option<String>,
    example: Option<String>,
) -> Result<()> {
    let mut form = WordForm::new(english, japanese);
    form.pronunciation = pronunciation;
    form.example = example;

    let result = ctx.api.add_word(form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = if let Some(term) = search {
        ctx.api.search_words(&term)?
    } else {
        ctx.api.list_words()?
    };
    print_words(&result.listed_words);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, positions: Vec<String>) -> Result<()> {
    let parsed = parse_positions(&positions)?;
    let result = ctx.api.view_words(&parsed)?;
    print_full_words(&result.listed_words);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    position: String,
    english: Option<String>,
    japanese: Option<String>,
    pronunciation: Option<String>,
    example: Option<String>,
) -> Result<()> {
    let parsed = parse_position(&position)?;
    let patch = WordPatch {
        english,
        japanese,
        pronunciation,
        example,
    };
    let result = ctx.api.update_word(parsed, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, positions: Vec<String>) -> Result<()> {
    let parsed = parse_positions(&positions)?;
    let result = ctx.api.delete_words(&parsed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear_words(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_words(&term)?;
    print_words(&result.listed_words);
    print_messages(&result.messages);
    Ok(())
}

fn handle_say(ctx: &mut AppContext, position: String) -> Result<()> {
    let parsed = parse_position(&position)?;
    let result = ctx.api.view_words(&[parsed])?;

    if let Some(lw) = result.listed_words.first() {
        println!(
            "{}  {}",
            lw.word.english.bold(),
            lw.word.japanese.normal()
        );
        // Speech is best-effort; a missing TTS backend never fails the command
        if let Err(e) = speech::speak(&lw.word.english, &ctx.speech_lang) {
            eprintln!("Warning: Failed to start speech output: {}", e);
        }
    }
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.word_stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("speech-lang = {}", config.get_speech_lang());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!(
        "{}",
        ctx.api.data_dir().join("wordaid-words.json").display()
    );
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let line = match &message.detail {
            Some(detail) => format!("{} ({})", message.content, detail),
            None => message.content.clone(),
        };
        match message.level {
            MessageLevel::Info => println!("{}", line.dimmed()),
            MessageLevel::Success => println!("{}", line.green()),
            MessageLevel::Warning => println!("{}", line.yellow()),
            MessageLevel::Error => println!("{}", line.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_words(words: &[ListedWord]) {
    if words.is_empty() {
        println!("No words found.");
        return;
    }

    for lw in words {
        let idx_str = format!("{}. ", lw.position);
        let entry = match &lw.word.pronunciation {
            Some(p) => format!("{} {}  {}", lw.word.english, p, lw.word.japanese),
            None => format!("{}  {}", lw.word.english, lw.word.japanese),
        };

        let time_ago = format_time_ago(lw.word.created_at);

        let idx_width = idx_str.width();
        let fixed_width = 4 + idx_width + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let entry_display = truncate_to_width(&entry, available);
        let padding = available.saturating_sub(entry_display.width());

        println!(
            "    {}{}{}  {}",
            idx_str.normal(),
            entry_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn print_full_words(words: &[ListedWord]) {
    for (i, lw) in words.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        match &lw.word.pronunciation {
            Some(p) => println!(
                "{} {} {}",
                format!("{}.", lw.position).yellow(),
                lw.word.english.bold(),
                p.dimmed()
            ),
            None => println!(
                "{} {}",
                format!("{}.", lw.position).yellow(),
                lw.word.english.bold()
            ),
        }
        println!("--------------------------------");
        println!("{}", lw.word.japanese);
        if let Some(example) = &lw.word.example {
            println!();
            println!("{}", example.italic());
        }
        println!();
        println!(
            "{}",
            format!(
                "added {} · updated {}",
                format_time_ago(lw.word.created_at).trim(),
                format_time_ago(lw.word.updated_at).trim()
            )
            .dimmed()
        );
    }
}

fn print_stats(stats: &VocabStats) {
    println!("Words:              {}", stats.total);
    println!(
        "With pronunciation: {} ({}%)",
        stats.with_pronunciation,
        stats.pronunciation_pct()
    );
    println!("With example:       {}", stats.with_example);
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

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn parse_position(s: &str) -> Result<usize> {
    s.parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| WordAidError::Api(format!("Invalid position: {}", s)))
}

fn parse_positions(strs: &[String]) -> Result<Vec<usize>> {
    strs.iter().map(|s| parse_position(s)).collect()
}
