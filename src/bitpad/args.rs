use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bitpad")]
#[command(version)]
#[command(about = "Local-first HTML/CSS/JS snippet playground", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new bit
    #[command(alias = "n")]
    New {
        /// Title of the bit
        #[arg(required = false)]
        title: Vec<String>,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,

        /// Initial HTML source
        #[arg(long)]
        html: Option<String>,

        /// Initial CSS source
        #[arg(long)]
        css: Option<String>,

        /// Initial JavaScript source
        #[arg(long)]
        js: Option<String>,

        /// Make the bit publicly visible
        #[arg(long)]
        public: bool,

        /// Skip opening the editor for the HTML source
        #[arg(long)]
        no_editor: bool,
    },

    /// List your bits
    #[command(alias = "ls")]
    List,

    /// Browse public bits
    #[command(alias = "ex")]
    Explore,

    /// View a bit's detail (counts a view)
    #[command(alias = "v")]
    View {
        /// Bit to view (index like 1 or e1, or an id)
        selector: String,
    },

    /// Edit one source field of a bit
    #[command(alias = "e")]
    Edit {
        /// Bit to edit (index like 1 or e1, or an id)
        selector: String,

        /// Edit the title
        #[arg(long, group = "field")]
        title: bool,

        /// Edit the description
        #[arg(long, group = "field")]
        description: bool,

        /// Edit the HTML source
        #[arg(long, group = "field")]
        html: bool,

        /// Edit the CSS source
        #[arg(long, group = "field")]
        css: bool,

        /// Edit the JavaScript source
        #[arg(long, group = "field")]
        js: bool,

        /// New value; skips the editor
        #[arg(long)]
        set: Option<String>,
    },

    /// Render a bit's preview document
    #[command(alias = "p")]
    Preview {
        /// Bit to render (index like 1 or e1, or an id)
        selector: String,
    },

    /// Make a bit publicly visible
    #[command(alias = "pub")]
    Publish {
        /// Bit to publish (index like 1, or an id)
        selector: String,
    },

    /// Make a bit private again
    #[command(alias = "unpub")]
    Unpublish {
        /// Bit to unpublish (index like 1 or e1, or an id)
        selector: String,
    },

    /// Delete a bit
    #[command(alias = "rm")]
    Delete {
        /// Bit to delete (index like 1, or an id)
        selector: String,
    },

    /// Create an account and sign in
    Register {
        username: String,
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Sign in
    Login {
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Update the signed-in account
    Profile {
        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,
    },

    /// Show or change the color theme
    Theme {
        /// light or dark; omit to show the current theme
        value: Option<String>,

        /// Flip between light and dark
        #[arg(long, conflicts_with = "value")]
        toggle: bool,
    },

    /// Show or change configuration
    Config {
        /// Config key (preview-dir, auto-refresh)
        key: Option<String>,
        /// New value for the key
        value: Option<String>,
    },
}
