//! Line commands typed at the prompt.

use jobby_core::{EmploymentType, Msg, Route, SalaryRange};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// One or more messages to dispatch in order.
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  go <path>              open a route: /, /login, /jobs, /jobs/<id>
  home | jobs            shortcuts for / and /jobs
  open <id>              open a job's details
  user <name>            set the username field
  pass <password>        set the password field
  login [<name> <pass>]  submit the login form
  logout                 end the session
  type <ID>              toggle FULLTIME, PARTTIME, FREELANCE or INTERNSHIP
  salary <ID>            pick 1000000, 2000000, 3000000 or 4000000
  search <text>          edit the search box (no fetch)
  find [<text>]          run the search
  retry [jobs|profile|details]
  help | quit";

pub fn parse_command(line: &str) -> Command {
    let line = line.strip_suffix('\r').unwrap_or(line).trim_start();
    // Everything after the first separator, untouched; passwords keep their spaces.
    let (word, raw) = match line.split_once(char::is_whitespace) {
        Some((word, raw)) => (word, raw),
        None => (line.trim_end(), ""),
    };
    let rest = raw.trim();
    let line = line.trim_end();

    let msgs = match word.to_ascii_lowercase().as_str() {
        "" => return Command::Dispatch(Vec::new()),
        "help" | "?" => return Command::Help,
        "quit" | "exit" | "q" => return Command::Quit,
        "go" => vec![Msg::Navigate(Route::parse(rest))],
        "home" => vec![Msg::Navigate(Route::Home)],
        "jobs" => vec![Msg::Navigate(Route::Jobs)],
        "open" if !rest.is_empty() => vec![Msg::Navigate(Route::JobDetails(rest.to_string()))],
        "user" => vec![Msg::UsernameChanged(rest.to_string())],
        "pass" => vec![Msg::PasswordChanged(raw.to_string())],
        "login" => match raw.trim_start().split_once(char::is_whitespace) {
            Some((user, pass)) => vec![
                Msg::UsernameChanged(user.to_string()),
                Msg::PasswordChanged(pass.to_string()),
                Msg::LoginSubmitted,
            ],
            None if rest.is_empty() => vec![Msg::LoginSubmitted],
            None => return Command::Unknown(line.to_string()),
        },
        "logout" => vec![Msg::LogoutClicked],
        "type" => match EmploymentType::from_id(rest) {
            Some(kind) => vec![Msg::TypeToggled(kind)],
            None => return Command::Unknown(line.to_string()),
        },
        "salary" => match SalaryRange::from_id(rest) {
            Some(range) => vec![Msg::SalarySelected(range)],
            None => return Command::Unknown(line.to_string()),
        },
        "search" => vec![Msg::SearchTextChanged(rest.to_string())],
        "find" if rest.is_empty() => vec![Msg::SearchSubmitted],
        "find" => vec![
            Msg::SearchTextChanged(rest.to_string()),
            Msg::SearchSubmitted,
        ],
        "retry" => match rest {
            "" | "jobs" => vec![Msg::RetryJobs],
            "profile" => vec![Msg::RetryProfile],
            "details" => vec![Msg::RetryJobDetails],
            _ => return Command::Unknown(line.to_string()),
        },
        _ => return Command::Unknown(line.to_string()),
    };
    Command::Dispatch(msgs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_shorthand_fills_form_then_submits() {
        assert_eq!(
            parse_command("login rahul rahul@2021"),
            Command::Dispatch(vec![
                Msg::UsernameChanged("rahul".to_string()),
                Msg::PasswordChanged("rahul@2021".to_string()),
                Msg::LoginSubmitted,
            ])
        );
        assert_eq!(
            parse_command("login"),
            Command::Dispatch(vec![Msg::LoginSubmitted])
        );
    }

    #[test]
    fn search_edits_and_find_submits() {
        assert_eq!(
            parse_command("search  python dev "),
            Command::Dispatch(vec![Msg::SearchTextChanged("python dev".to_string())])
        );
        assert_eq!(
            parse_command("find"),
            Command::Dispatch(vec![Msg::SearchSubmitted])
        );
        assert_eq!(
            parse_command("find rust"),
            Command::Dispatch(vec![
                Msg::SearchTextChanged("rust".to_string()),
                Msg::SearchSubmitted,
            ])
        );
    }

    #[test]
    fn facets_parse_by_id() {
        assert_eq!(
            parse_command("type fulltime"),
            Command::Dispatch(vec![Msg::TypeToggled(EmploymentType::FullTime)])
        );
        assert_eq!(
            parse_command("salary 3000000"),
            Command::Dispatch(vec![Msg::SalarySelected(SalaryRange::ThirtyLpa)])
        );
        assert!(matches!(parse_command("type remote"), Command::Unknown(_)));
    }

    #[test]
    fn navigation_and_control() {
        assert_eq!(
            parse_command("open d1"),
            Command::Dispatch(vec![Msg::Navigate(Route::JobDetails("d1".to_string()))])
        );
        assert_eq!(
            parse_command("go /jobs"),
            Command::Dispatch(vec![Msg::Navigate(Route::Jobs)])
        );
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("   "), Command::Dispatch(Vec::new()));
        assert!(matches!(parse_command("open"), Command::Unknown(_)));
    }

    #[test]
    fn passwords_keep_surrounding_spaces() {
        assert_eq!(
            parse_command("pass  two words "),
            Command::Dispatch(vec![Msg::PasswordChanged(" two words ".to_string())])
        );
        assert_eq!(
            parse_command("login rahul  rahul@2021 \r"),
            Command::Dispatch(vec![
                Msg::UsernameChanged("rahul".to_string()),
                Msg::PasswordChanged(" rahul@2021 ".to_string()),
                Msg::LoginSubmitted,
            ])
        );
        assert_eq!(
            parse_command("user  rahul "),
            Command::Dispatch(vec![Msg::UsernameChanged("rahul".to_string())])
        );
    }
}
