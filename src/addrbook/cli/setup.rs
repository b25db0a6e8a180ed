use addrbook::commands::search::Query;
use addrbook::model::ContactType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("ADDRBOOK_GIT_HASH");
    const IS_RELEASE: &str = env!("ADDRBOOK_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version = get_version())]
#[command(
    about = "Single-user address book for the terminal",
    long_about = "Single-user address book for the terminal.\n\n\
                  Without a subcommand, starts the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to load and save (defaults to the configured one, addressbook.csv)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored messages
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every contact, one line each
    #[command(alias = "ls")]
    List,

    /// Show all fields of one contact
    View {
        /// Contact id
        id: u32,
    },

    /// Search or filter contacts
    Search {
        /// Field to match against
        #[arg(value_enum)]
        field: SearchField,

        /// Text to look for (type and tag match exactly)
        query: String,
    },

    /// Print a report
    Report {
        #[arg(value_enum)]
        kind: ReportKind,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    Name,
    Email,
    Phone,
    Type,
    City,
    Tag,
}

impl SearchField {
    pub fn query(self, text: String) -> Query {
        match self {
            SearchField::Name => Query::Name(text),
            SearchField::Email => Query::Email(text),
            SearchField::Phone => Query::Phone(text),
            SearchField::Type => {
                // accept any casing of a known type, keep anything else verbatim
                let token = ContactType::ALL
                    .into_iter()
                    .find(|kind| kind.as_str().eq_ignore_ascii_case(&text))
                    .map(|kind| kind.as_str().to_string())
                    .unwrap_or(text);
                Query::Type(token)
            }
            SearchField::City => Query::City(text),
            SearchField::Tag => Query::Tag(text),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Contacts missing an email or phone
    Missing,
    /// Contact counts per type
    Types,
    /// Members per group
    Groups,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["addrbook"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["addrbook", "list", "--file", "x.csv", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.file, Some(PathBuf::from("x.csv")));
        assert!(cli.verbose);
    }

    #[test]
    fn search_args() {
        let cli = Cli::try_parse_from(["addrbook", "search", "email", "example"]).unwrap();
        match cli.command {
            Some(Commands::Search { field, query }) => {
                assert_eq!(field, SearchField::Email);
                assert_eq!(field.query(query), Query::Email("example".into()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn type_query_normalises_known_types() {
        assert_eq!(
            SearchField::Type.query("business".into()),
            Query::Type("Business".into())
        );
        assert_eq!(
            SearchField::Type.query("Robot".into()),
            Query::Type("Robot".into())
        );
    }

    #[test]
    fn bad_id_is_a_usage_error() {
        assert!(Cli::try_parse_from(["addrbook", "view", "abc"]).is_err());
        assert!(Cli::try_parse_from(["addrbook", "report", "everything"]).is_err());
    }
}
