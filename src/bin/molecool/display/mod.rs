mod banner;
mod error;
mod progress;
mod report;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use report::{write_angle_list, write_bond_list};
pub use tables::{
    CompositionRow, print_angle_info, print_bond_summary, print_structure_info,
    write_composition, write_summary,
};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Banner, spinners and summary tables go to stderr only when set.
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        Self {
            interactive: self.interactive && !quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_turns_off_interactive_output() {
        let tty = Context { interactive: true };
        assert!(tty.with_quiet(false).interactive);
        assert!(!tty.with_quiet(true).interactive);
        assert!(!Context { interactive: false }.with_quiet(false).interactive);
    }
}
