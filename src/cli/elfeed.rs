use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ElfeedCommands {
    /// List feed shortcuts tagged `fomo`
    Items,

    /// Print the search string of the feed with this exact title
    Resolve {
        /// Feed title as shown in the list
        title: String,
    },
}
