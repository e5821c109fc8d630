use bitpad::api::{ConfigAction, NewBit, PlaygroundApi, ThemeAction};
use bitpad::editor::{edit_source, SourceField};
use bitpad::error::{BitpadError, Result};
use bitpad::model::{BitPatch, Theme, UserPatch};
use bitpad::storage::fs::FileStorage;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_bit_detail, print_bits, print_messages, print_user};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: PlaygroundApi<FileStorage>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New {
            title,
            description,
            html,
            css,
            js,
            public,
            no_editor,
        }) => handle_new(&mut ctx, title, description, html, css, js, public, no_editor),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Explore) => handle_explore(&ctx),
        Some(Commands::View { selector }) => handle_view(&mut ctx, &selector),
        Some(Commands::Edit {
            selector,
            title,
            description,
            html,
            css,
            js,
            set,
        }) => handle_edit(&mut ctx, &selector, title, description, html, css, js, set),
        Some(Commands::Preview { selector }) => handle_preview(&mut ctx, &selector),
        Some(Commands::Publish { selector }) => handle_visibility(&mut ctx, &selector, true),
        Some(Commands::Unpublish { selector }) => handle_visibility(&mut ctx, &selector, false),
        Some(Commands::Delete { selector }) => handle_delete(&mut ctx, &selector),
        Some(Commands::Register {
            username,
            email,
            password,
        }) => handle_register(&mut ctx, &username, &email, &password),
        Some(Commands::Login { email, password }) => handle_login(&mut ctx, &email, &password),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Whoami) => handle_whoami(&ctx),
        Some(Commands::Profile { username, email }) => handle_profile(&mut ctx, username, email),
        Some(Commands::Theme { value, toggle }) => handle_theme(&mut ctx, value, toggle),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => {
            if ctx.api.current_user().is_some() {
                handle_list(&ctx)
            } else {
                handle_explore(&ctx)
            }
        }
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("BITPAD_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "bitpad", "bitpad")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let api = PlaygroundApi::open(
        FileStorage::new(data_dir.clone()),
        FileStorage::new(data_dir.clone()),
        data_dir,
    )?;
    Ok(AppContext { api })
}

#[allow(clippy::too_many_arguments)]
fn handle_new(
    ctx: &mut AppContext,
    title: Vec<String>,
    description: Option<String>,
    html: Option<String>,
    css: Option<String>,
    js: Option<String>,
    public: bool,
    no_editor: bool,
) -> Result<()> {
    let html = match html {
        Some(html) => html,
        None if no_editor => String::new(),
        None => edit_source("", SourceField::Html)?,
    };

    let result = ctx.api.create_bit(NewBit {
        title: title.join(" "),
        description: description.unwrap_or_default(),
        html,
        css: css.unwrap_or_default(),
        javascript: js.unwrap_or_default(),
        is_public: public,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_mine()?;
    print_bits(&result.listed_bits);
    print_messages(&result.messages);
    Ok(())
}

fn handle_explore(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.explore()?;
    print_bits(&result.listed_bits);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.view_bit(selector)?;
    if let Some(bit) = result.affected_bits.first() {
        print_bit_detail(bit);
    }
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    title: bool,
    description: bool,
    html: bool,
    css: bool,
    js: bool,
    set: Option<String>,
) -> Result<()> {
    let field = match (title, description, html, css, js) {
        (true, ..) => SourceField::Title,
        (_, true, ..) => SourceField::Description,
        (_, _, true, ..) => SourceField::Html,
        (_, _, _, true, _) => SourceField::Css,
        (_, _, _, _, true) => SourceField::Javascript,
        _ => {
            return Err(BitpadError::Api(
                "Choose a field to edit: --title, --description, --html, --css or --js".into(),
            ))
        }
    };

    let bit = ctx.api.get_bit(selector)?;
    let current = match field {
        SourceField::Title => &bit.title,
        SourceField::Description => &bit.description,
        SourceField::Html => &bit.html,
        SourceField::Css => &bit.css,
        SourceField::Javascript => &bit.javascript,
    };

    let edited = match set {
        Some(value) => value,
        None => edit_source(current, field)?,
    };

    let mut patch = BitPatch::default();
    match field {
        SourceField::Title => patch.title = Some(edited),
        SourceField::Description => patch.description = Some(edited),
        SourceField::Html => patch.html = Some(edited),
        SourceField::Css => patch.css = Some(edited),
        SourceField::Javascript => patch.javascript = Some(edited),
    }

    // Address by id: the listing index can shift once the edit bumps the
    // bit to the top of the recency order.
    let result = ctx.api.update_bit(&bit.id.to_string(), &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_preview(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.render_preview(selector)?;
    for path in &result.preview_paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_visibility(ctx: &mut AppContext, selector: &str, public: bool) -> Result<()> {
    let result = ctx.api.set_visibility(selector, public)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.delete_bit(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_register(
    ctx: &mut AppContext,
    username: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let result = ctx.api.register(username, email, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, email: &str, password: &str) -> Result<()> {
    let result = ctx.api.login(email, password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    if let Some(user) = &result.user {
        print_user(user);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_profile(
    ctx: &mut AppContext,
    username: Option<String>,
    email: Option<String>,
) -> Result<()> {
    if username.is_none() && email.is_none() {
        return handle_whoami(ctx);
    }

    let result = ctx.api.update_account(&UserPatch {
        username,
        email,
        theme: None,
    })?;
    if let Some(user) = &result.user {
        print_user(user);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, value: Option<String>, toggle: bool) -> Result<()> {
    let action = if toggle {
        ThemeAction::Toggle
    } else {
        match value {
            Some(raw) => {
                let theme = raw.parse::<Theme>().map_err(BitpadError::Api)?;
                ThemeAction::Set(theme)
            }
            None => ThemeAction::Show,
        }
    };

    let result = ctx.api.theme(action)?;
    if let Some(theme) = result.theme {
        println!("{}", theme);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match key.as_deref() {
            Some("preview-dir") => println!("preview-dir = {}", config.preview_dir),
            Some("auto-refresh") => println!("auto-refresh = {}", config.auto_refresh),
            Some(other) if result.messages.is_empty() => {
                println!("Unknown config key: {}", other)
            }
            _ => {
                println!("preview-dir = {}", config.preview_dir);
                println!("auto-refresh = {}", config.auto_refresh);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
