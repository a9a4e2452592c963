use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "recipedex")]
#[command(about = "Recipe bookmark manager with local persistent storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a recipe bookmark
    #[command(alias = "a")]
    Add {
        /// Recipe name
        name: String,

        /// Category (e.g. breakfast, dessert)
        category: String,

        /// Link to the recipe; https:// is added if no scheme is given
        link: String,
    },

    /// List recipes
    #[command(alias = "ls")]
    List {
        /// Only show this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: name-asc, name-desc, or type
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Edit one field of a recipe
    #[command(alias = "e")]
    Edit {
        /// Index of the recipe (as shown by list without filters)
        index: usize,

        /// Field to change: name, type, or link
        field: String,

        /// New value; empty values keep the old one
        value: String,
    },

    /// Delete a recipe (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// Index of the recipe (as shown by list without filters)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the categories present in the collection
    Categories,
}
