use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use console::style;
use std::io::{self, Write};

use crate::cli::{Cli, Shell};

const BIN_NAME: &str = "zli";

pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout();
    write_completions(shell, &mut stdout);
    stdout.flush()?;

    print_installation_instructions(shell);

    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();

    let shell_type = match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
    };

    generate(shell_type, &mut cmd, BIN_NAME, out);
}

fn print_installation_instructions(shell: Shell) {
    eprintln!("\n{}", style("Installation Instructions").bold().underlined());

    match shell {
        Shell::Bash => {
            eprintln!("Add the following to your ~/.bashrc:");
            eprintln!();
            eprintln!("{}", style("  eval \"$(zli completion bash)\"").dim());
        }
        Shell::Zsh => {
            eprintln!("Save the script in your fpath:");
            eprintln!();
            eprintln!("{}", style("  zli completion zsh > /usr/local/share/zsh/site-functions/_zli").dim());
            eprintln!();
            eprintln!("Then restart your shell or run:");
            eprintln!();
            eprintln!("{}", style("  autoload -U compinit && compinit").dim());
        }
        Shell::Fish => {
            eprintln!("Save the completion script:");
            eprintln!();
            eprintln!("{}", style("  zli completion fish > ~/.config/fish/completions/zli.fish").dim());
        }
        Shell::PowerShell => {
            eprintln!("Add the following to your PowerShell profile:");
            eprintln!();
            eprintln!("{}", style("  zli completion powershell | Out-String | Invoke-Expression").dim());
        }
    }
}
