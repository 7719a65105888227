//! Player-facing strings.

pub const NO_DESCRIPTION: &str = "No description.";
pub const CHOOSE_OPTION: &str = "Choose an option or try 'help'.";

pub const HELP_FULL: &str = "Commands: <menu option>, help, quit";
pub const HELP_NO_QUIT: &str = "Commands: <menu option>, help";
pub const HELP_NO_OPTIONS: &str = "Commands: help, quit";
pub const HELP_NO_OPTIONS_NO_QUIT: &str = "Commands: help";

pub fn not_implemented(node: &str) -> String {
    format!("Menu node '{node}' is not implemented. Make another choice.")
}

pub fn node_error(node: &str) -> String {
    format!("Error in menu node '{node}'.")
}

pub fn session_not_found(caller: &str) -> String {
    format!("Menu object not found for {caller}!")
}

/// Generated help for nodes without their own help text.
pub fn default_help(has_options: bool, allow_quit: bool) -> &'static str {
    match (has_options, allow_quit) {
        (true, true) => HELP_FULL,
        (true, false) => HELP_NO_QUIT,
        (false, true) => HELP_NO_OPTIONS,
        (false, false) => HELP_NO_OPTIONS_NO_QUIT,
    }
}
