//! Interactive browsing session on the terminal

use std::io::{BufRead, Write};

use cashvm_browser::{grid, ActivationYear, Browser, Catalog, Effect, Event, Surface};
use cashvm_opcodes::Category;

use crate::render::{render_chips, render_detail, render_grid};
use crate::CliError;

const PROMPT: &str = "cashvm> ";

const HELP: &str = "\
Commands:
  search <text>      set the search text (no text clears it)
  by-type            show operation type filters
  by-year            show activation year filters
  category <name>    toggle a category filter
  year <year>        toggle an activation year filter
  clear              clear all filters
  expand <range>     expand or collapse a range (1-3, E-F)
  select <opcode>    select an opcode (again to deselect)
  close              close the selected opcode
  hash <fragment>    navigate to a location fragment
  show               print the grid
  help               print this help
  quit               leave";

/// Surface that reports effects as terminal notices
#[derive(Debug, Default)]
pub struct TerminalSurface {
    /// Current location fragment
    pub fragment: String,
    /// Current title
    pub title: String,
    notices: Vec<String>,
}

impl TerminalSurface {
    fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

impl Surface for TerminalSurface {
    fn apply(&mut self, effect: &Effect) {
        let notice = match effect {
            Effect::WriteFragment(fragment) => {
                self.fragment = fragment.clone();
                if fragment.is_empty() {
                    "location: (no fragment)".to_string()
                } else {
                    format!("location: {fragment}")
                }
            }
            Effect::SetTitle(title) => {
                self.title = title.clone();
                format!("title: {title}")
            }
            Effect::ScrollIntoView(value) => format!("scroll: 0x{value:02X}"),
            Effect::FocusSearch => "focus: search".to_string(),
        };
        self.notices.push(notice);
    }
}

enum Command {
    Dispatch(Event),
    Show,
    Help,
    Quit,
    Nothing,
}

fn parse_command(catalog: &Catalog, line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "" => Command::Nothing,
        "search" if rest.is_empty() => Command::Dispatch(Event::ClearSearch),
        "search" => Command::Dispatch(Event::SetSearch(rest.to_string())),
        "by-type" => Command::Dispatch(Event::ShowOperationType),
        "by-year" => Command::Dispatch(Event::ShowActivationYear),
        "category" => {
            let category: Category = rest.parse().map_err(|e| format!("{e}"))?;
            Command::Dispatch(Event::ToggleCategory(category))
        }
        "year" => {
            let year: ActivationYear = rest.parse().map_err(|e| format!("{e}"))?;
            Command::Dispatch(Event::ToggleYear(year))
        }
        "clear" => Command::Dispatch(Event::ClearFilters),
        "expand" => Command::Dispatch(Event::ToggleRange(parse_range(rest)?)),
        "select" => {
            let row = catalog
                .table()
                .lookup(rest)
                .ok_or_else(|| format!("unknown opcode: {rest}"))?;
            Command::Dispatch(Event::Select {
                value: row.value,
                scroll: true,
            })
        }
        "close" => Command::Dispatch(Event::Close),
        "hash" => Command::Dispatch(Event::FragmentChanged(rest.to_string())),
        "show" | "grid" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(command)
}

// `1-3`, `1`, `e-f` or `E` -> start row of a collapsed range
fn parse_range(text: &str) -> Result<u8, String> {
    let start = text.split('-').next().unwrap_or_default().trim();
    u8::from_str_radix(start, 16)
        .ok()
        .and_then(grid::range_at)
        .map(|range| range.start)
        .ok_or_else(|| format!("not a collapsible range: {text}"))
}

/// Run a session reading commands from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    fragment: &str,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut browser = Browser::open(catalog, TerminalSurface::default(), fragment);
    print_notices(&mut browser, out)?;
    if let Some(row) = browser.view().selected {
        write!(out, "{}", render_detail(catalog, row))?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        match parse_command(catalog, &line) {
            Ok(Command::Nothing) => {}
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Show) => {
                let view = browser.view();
                write!(out, "{}", render_grid(&view))?;
                writeln!(out, "{}", render_chips(&view))?;
            }
            Ok(Command::Dispatch(event)) => {
                let selects = matches!(event, Event::Select { .. } | Event::FragmentChanged(_));
                browser.dispatch(event);
                print_notices(&mut browser, out)?;

                let view = browser.view();
                if selects {
                    if let Some(row) = view.selected {
                        write!(out, "{}", render_detail(catalog, row))?;
                    }
                }
                if view.highlighted.is_some() {
                    writeln!(out, "{} matching opcodes", view.matches.len())?;
                }
                writeln!(out, "{}", render_chips(&view))?;
            }
            Err(message) => writeln!(out, "error: {message}")?,
        }
    }

    Ok(())
}

fn print_notices<W: Write>(
    browser: &mut Browser<'_, TerminalSurface>,
    out: &mut W,
) -> Result<(), CliError> {
    for notice in browser.surface_mut().drain() {
        writeln!(out, "{notice}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(fragment: &str, script: &str) -> String {
        let mut out = Vec::new();
        run(Catalog::global(), fragment, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_open_writes_title() {
        let out = session("", "quit\n");
        assert!(out.starts_with("title: CashVM Opcodes | Bitcoin Cash\n"));
    }

    #[test]
    fn test_deep_link_on_open() {
        let out = session("#OP_CAT", "");
        assert!(out.contains("title: OP_CAT | CashVM Opcodes | Bitcoin Cash"));
        assert!(out.contains("scroll: 0x7E"));
        assert!(out.contains("OP_CAT (0x7E)"));
    }

    #[test]
    fn test_select_and_close() {
        let out = session("", "select op_checksig\nclose\nquit\n");
        assert!(out.contains("location: #OP_CHECKSIG"));
        assert!(out.contains("OP_CHECKSIG (0xAC)"));
        assert!(out.contains("location: (no fragment)"));
    }

    #[test]
    fn test_auto_clear_keeps_search() {
        let out = session("", "category introspection\nsearch add\nquit\n");
        assert!(out.contains("*Introspection*"));
        // Filters dropped, stage chips back
        assert!(out.contains("Filters: Operation Type | Activation Year"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let out = session("", "frobnicate\nyear 1999\nexpand 5\nselect OP_NOPE\nhelp\n");
        assert!(out.contains("error: unknown command: frobnicate"));
        assert!(out.contains("error: unknown activation year: 1999"));
        assert!(out.contains("error: not a collapsible range: 5"));
        assert!(out.contains("error: unknown opcode: OP_NOPE"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn test_show_grid() {
        let out = session("", "expand e-f\nshow\n");
        assert!(out.contains("F_  "));
        assert!(out.contains("rows 1-3 collapsed"));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1-3"), Ok(1));
        assert_eq!(parse_range("E"), Ok(0xE));
        assert!(parse_range("2").is_err());
        assert!(parse_range("").is_err());
    }
}
