use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Record a chosen item under `--trigger`
    Add {
        /// JSON of the launcher item that was chosen
        #[arg(long, short)]
        item: String,

        /// Query that was typed when the item was chosen
        #[arg(long, default_value = "")]
        query: String,
    },

    /// List remembered items whose query shares a word with this one
    Find {
        #[arg(long, default_value = "")]
        query: String,
    },
}
