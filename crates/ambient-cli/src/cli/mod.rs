mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{CheckParams, GenerateParams, InspectParams, ListParams};

/// Value of `--color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `auto` colors only when stdout and stderr are both terminals, since
    /// reports go to one and parse failures to the other.
    pub fn should_colorize(self) -> bool {
        use std::io::{IsTerminal, stderr, stdout};

        match self {
            Self::Auto => stdout().is_terminal() && stderr().is_terminal(),
            forced => forced == Self::Always,
        }
    }
}
