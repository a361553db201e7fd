//! Script command implementation.
//!
//! A script is a text file with one `|`-separated command per line.
//! Blank lines and lines starting with `#` are skipped.

use crate::error::CliError;
use crate::render::{self, LogView, SearchReport};
use libris_core::{Catalog, CoreError, Field, Requester};
use std::path::Path;
use tracing::{info, warn};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `add|title|author|isbn|content_ref`
    Add {
        /// Title.
        title: String,
        /// Author.
        author: String,
        /// ISBN.
        isbn: String,
        /// Content reference.
        content_reference: String,
    },
    /// `search|field|query|user_id|user_name`
    Search {
        /// Field to search.
        field: Field,
        /// Raw query text.
        query: String,
        /// Who is asking.
        requester: Requester,
    },
    /// `history|user_id`
    History {
        /// Requester whose entries are shown.
        user_id: String,
    },
    /// `log`
    Log,
    /// `stats`
    Stats,
    /// `list`
    List,
}

/// Parses a whole script, skipping blanks and comments.
pub fn parse(source: &str) -> Result<Vec<Step>, CliError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

fn parse_line(number: usize, line: &str) -> Result<Step, CliError> {
    let parts: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('|').collect();
    let (command, args) = match parts.split_first() {
        Some((command, args)) => (command.trim().to_ascii_lowercase(), args),
        None => return Err(CliError::syntax(number, "empty command")),
    };

    let expect = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(CliError::syntax(
                number,
                format!("{command} takes {n} arguments, got {}", args.len()),
            ))
        }
    };

    match command.as_str() {
        "add" => {
            expect(4)?;
            Ok(Step::Add {
                title: args[0].trim().to_string(),
                author: args[1].trim().to_string(),
                isbn: args[2].trim().to_string(),
                content_reference: args[3].trim().to_string(),
            })
        }
        "search" => {
            expect(4)?;
            let field = args[0]
                .parse()
                .map_err(|e: CoreError| CliError::syntax(number, e.to_string()))?;
            let requester = super::requester(args[2], args[3])
                .map_err(|e| CliError::syntax(number, e.to_string()))?;
            Ok(Step::Search {
                field,
                query: args[1].to_string(),
                requester,
            })
        }
        "history" => {
            expect(1)?;
            Ok(Step::History {
                user_id: args[0].trim().to_string(),
            })
        }
        "log" => expect(0).map(|()| Step::Log),
        "stats" => expect(0).map(|()| Step::Stats),
        "list" => expect(0).map(|()| Step::List),
        other => Err(CliError::syntax(number, format!("unknown command {other:?}"))),
    }
}

/// Reads and executes a script file.
pub fn run(path: &Path, format: &str, no_samples: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let steps = parse(&source)?;
    info!(steps = steps.len(), path = %path.display(), "Running script");

    let mut catalog = super::open_catalog(no_samples);
    let json = format == "json";
    for step in &steps {
        execute(&mut catalog, step, json)?;
    }

    Ok(())
}

fn execute(
    catalog: &mut Catalog,
    step: &Step,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match step {
        Step::Add {
            title,
            author,
            isbn,
            content_reference,
        } => {
            let record = catalog.add_record(
                title.as_str(),
                author.as_str(),
                isbn.as_str(),
                content_reference.as_str(),
            );
            if !json {
                println!("✓ Added {} ({})", record.title(), record.isbn());
            }
        }
        Step::Search {
            field,
            query,
            requester,
        } => match catalog.search(*field, query, requester) {
            Ok(comparison) => {
                let report = SearchReport::new(query, &comparison);
                if json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!("Search by {field} for {query:?} from {requester}");
                    print!("{}", report.to_text());
                    println!();
                }
            }
            Err(err @ CoreError::InvalidArgument { .. }) => {
                warn!(%field, "Skipping search: {err}");
                if !json {
                    println!("✗ {err}");
                }
            }
            Err(err) => return Err(err.into()),
        },
        Step::History { user_id } => {
            let entries = catalog.history_for(user_id);
            if json {
                let views: Vec<LogView> = entries.iter().map(LogView::from).collect();
                println!("{}", serde_json::to_string(&views)?);
            } else {
                println!("History for {user_id}:");
                print!("{}", render::history_text(&entries));
            }
        }
        Step::Log => {
            let entries = catalog.query_log();
            if json {
                let views: Vec<LogView> = entries.iter().map(LogView::from).collect();
                println!("{}", serde_json::to_string(&views)?);
            } else {
                print!("{}", render::log_text(&entries));
            }
        }
        Step::Stats => {
            let snapshot = catalog.stats().snapshot();
            if json {
                println!("{}", serde_json::to_string(&snapshot)?);
            } else {
                print!("{}", render::stats_text(catalog.len(), &snapshot));
            }
        }
        Step::List => {
            if json {
                let views: Vec<render::RecordView> = catalog
                    .records()
                    .iter()
                    .map(|r| render::RecordView::from(r.as_ref()))
                    .collect();
                println!("{}", serde_json::to_string(&views)?);
            } else {
                for record in catalog.records() {
                    println!("{} | {} | {}", record.isbn(), record.title(), record.author());
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let steps = parse(
            "# seed\n\
             add|Oromay|Bealu Girma|9780100|books/oromay.pdf\n\
             \n\
             search|author|bealu girma|u1|Abebe\n\
             history|u1\n\
             log\n\
             STATS\n\
             list\n",
        )
        .unwrap();

        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps[0],
            Step::Add {
                title: "Oromay".into(),
                author: "Bealu Girma".into(),
                isbn: "9780100".into(),
                content_reference: "books/oromay.pdf".into(),
            }
        );
        assert_eq!(
            steps[1],
            Step::Search {
                field: Field::Author,
                query: "bealu girma".into(),
                requester: Requester::new("u1", "Abebe"),
            }
        );
        assert_eq!(steps[2], Step::History { user_id: "u1".into() });
        assert_eq!(&steps[3..], &[Step::Log, Step::Stats, Step::List]);
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse("log\n\nsearch|color|red|u1|A\n").unwrap_err();
        assert!(matches!(err, CliError::ScriptSyntax { line: 3, .. }));

        let err = parse("add|only|three|fields\n").unwrap_err();
        assert!(matches!(err, CliError::ScriptSyntax { line: 1, .. }));

        let err = parse("delete|x\n").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }

    #[test]
    fn blank_requester_is_a_syntax_error() {
        let err = parse("search|title|x||Abebe\n").unwrap_err();
        assert!(err.to_string().contains("Please fill all fields"));
    }

    #[test]
    fn empty_query_is_kept_for_the_catalog() {
        let steps = parse("search|isbn||u1|A\n").unwrap();
        let mut catalog = Catalog::with_samples();
        execute(&mut catalog, &steps[0], true).unwrap();
        assert!(catalog.query_log().is_empty());
        assert_eq!(catalog.stats().rejected_queries(), 1);
    }

    #[test]
    fn executed_steps_update_catalog() {
        let steps = parse(
            "add|Dertogada|Yismake Worku|9780002|books/d.pdf\n\
             search|isbn|9780002|u1|Abebe\n\
             search|title|DERTOGADA|u2|Kebede\n",
        )
        .unwrap();

        let mut catalog = Catalog::with_samples();
        for step in &steps {
            execute(&mut catalog, step, true).unwrap();
        }
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.query_log().len(), 2);
        assert_eq!(catalog.history_for("u2").len(), 1);
    }
}
