//! Command to print shell completion scripts.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Generate a completion script for a shell.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();

        // Hints go to stderr so stdout stays a clean script
        if !global.quiet {
            for hint in install_hints(self.shell) {
                eprintln!("# {hint}");
            }
        }

        generate(self.shell, &mut cmd, name, &mut io::stdout());
        Ok(())
    }
}

fn install_hints(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "Install with:",
            "  iniparse completions bash > ~/.local/share/bash-completion/completions/iniparse",
            "or add to ~/.bashrc:",
            "  eval \"$(iniparse completions bash)\"",
        ],
        Shell::Zsh => &[
            "Install into a directory on $fpath:",
            "  iniparse completions zsh > ~/.zsh/completions/_iniparse",
        ],
        Shell::Fish => &[
            "Install with:",
            "  iniparse completions fish > ~/.config/fish/completions/iniparse.fish",
        ],
        Shell::PowerShell => &[
            "Load in the current session with:",
            "  iniparse completions powershell | Out-String | Invoke-Expression",
        ],
        _ => &[],
    }
}
