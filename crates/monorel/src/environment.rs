use std::fmt;
use std::io::IsTerminal;

pub const NO_TTY_VAR: &str = "MONOREL_NO_TTY";
pub const FORCE_TTY_VAR: &str = "MONOREL_FORCE_TTY";

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

impl fmt::Display for NonInteractiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitDisable => write!(f, "{NO_TTY_VAR} is set"),
            Self::CiDetected { env_var } => write!(f, "CI environment detected via {env_var}"),
            Self::NoTerminal => f.write_str("standard input is not a terminal"),
        }
    }
}

/// Checks the process environment and standard input.
pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    detect(|var| std::env::var_os(var).is_some(), || {
        std::io::stdin().is_terminal()
    })
}

/// `MONOREL_NO_TTY` wins over `MONOREL_FORCE_TTY`, which wins over CI
/// detection and the terminal check.
fn detect(
    is_set: impl Fn(&str) -> bool,
    stdin_is_terminal: impl FnOnce() -> bool,
) -> Option<NonInteractiveReason> {
    if is_set(NO_TTY_VAR) {
        return Some(NonInteractiveReason::ExplicitDisable);
    }

    if is_set(FORCE_TTY_VAR) {
        return None;
    }

    if let Some(env_var) = CI_ENV_VARS.iter().find(|var| is_set(var)) {
        return Some(NonInteractiveReason::CiDetected {
            env_var: (*env_var).to_string(),
        });
    }

    if !stdin_is_terminal() {
        return Some(NonInteractiveReason::NoTerminal);
    }

    None
}
