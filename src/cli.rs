use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "zli", version)]
#[command(about = "A CLI for Jenkins heavy workflow", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(visible_alias = "d", about = "Deploy a site with its Jenkins job")]
    Deploy {
        #[arg(help = "Site alias")]
        alias: String,
    },

    #[command(visible_alias = "l", about = "List all the aliases and job mapping stored locally")]
    List,

    #[command(visible_alias = "a", about = "Add a new site alias and its Jenkins URL mapping")]
    Add {
        #[arg(help = "Site alias")]
        alias: String,

        #[arg(help = "Job's sub URL, e.g. job/my-site (a full job URL on the configured server also works)")]
        path: String,
    },

    #[command(visible_alias = "rm", about = "Remove a site alias mapping")]
    Remove {
        #[arg(help = "Site alias")]
        alias: String,
    },

    #[command(visible_alias = "s", about = "Display the status of a build for a job, defaults to latest")]
    Status {
        #[arg(help = "Site alias")]
        alias: String,

        #[arg(help = "Build number (defaults to the last build)")]
        build: Option<String>,
    },

    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(value_enum, help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
