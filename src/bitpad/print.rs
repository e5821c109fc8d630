use bitpad::api::{CmdMessage, MessageLevel};
use bitpad::index::{DisplayBit, DisplayIndex};
use bitpad::model::{Bit, User};
use bitpad::routes::Route;
use chrono::{DateTime, Utc};
use colored::Colorize;
use console::Style;
use once_cell::sync::Lazy;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PUBLIC_MARKER: &str = "◉";

static INDEX_STYLE: Lazy<Style> = Lazy::new(|| Style::new().yellow());
static TITLE_STYLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
static TIME_STYLE: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_bits(bits: &[DisplayBit]) {
    if bits.is_empty() {
        println!("No bits found.");
        return;
    }

    for db in bits {
        let idx_str = match &db.index {
            DisplayIndex::Mine(n) => format!("{}. ", n),
            DisplayIndex::Public(n) => format!("e{}. ", n),
        };

        let marker = if db.bit.is_public {
            format!("{} ", PUBLIC_MARKER)
        } else {
            "  ".to_string()
        };

        let views = format!("{} views", db.bit.views);
        let time_ago = format_time_ago(db.bit.updated_at);

        let left = format!(
            "  {}{}{}",
            INDEX_STYLE.apply_to(&idx_str),
            marker,
            TITLE_STYLE.apply_to(&db.bit.title)
        );
        // Width math runs on the unstyled text; ANSI codes have no width.
        let left_width = 2 + idx_str.width() + marker.width() + db.bit.title.width();
        let right = format!("{:>width$}  {}", views, time_ago, width = TIME_WIDTH);
        let padding = LINE_WIDTH
            .saturating_sub(left_width + right.width())
            .max(1);

        println!(
            "{}{}{}",
            left,
            " ".repeat(padding),
            TIME_STYLE.apply_to(&right)
        );
    }
}

pub(super) fn print_bit_detail(bit: &Bit) {
    println!(
        "{} {}",
        TITLE_STYLE.apply_to(&bit.title),
        if bit.is_public {
            PUBLIC_MARKER.green().to_string()
        } else {
            "(private)".dimmed().to_string()
        }
    );
    println!(
        "{}",
        format!(
            "by {} · {} views · updated {}",
            bit.author_username,
            bit.views,
            format_time_ago(bit.updated_at)
        )
        .dimmed()
    );
    if !bit.description.is_empty() {
        println!("{}", bit.description);
    }
    println!(
        "{}",
        format!(
            "workspace: {}   detail: {}",
            Route::Editor(bit.id),
            Route::Detail(bit.id)
        )
        .dimmed()
    );

    for (label, source) in [
        ("HTML", &bit.html),
        ("CSS", &bit.css),
        ("JavaScript", &bit.javascript),
    ] {
        println!("\n{}", format!("--- {} ---", label).yellow());
        if source.is_empty() {
            println!("{}", "(empty)".dimmed());
        } else {
            println!("{}", source);
        }
    }
}

pub(super) fn print_user(user: &User) {
    println!("{} <{}>", TITLE_STYLE.apply_to(&user.username), user.email);
    println!(
        "{}",
        format!(
            "theme: {} · member {}",
            user.theme,
            format_time_ago(user.created_at)
        )
        .dimmed()
    );
}

fn format_time_ago(time: DateTime<Utc>) -> String {
    let formatter = Formatter::new();
    let now = Utc::now();
    let duration = (now - time).to_std().unwrap_or_default();
    formatter.convert(duration)
}
