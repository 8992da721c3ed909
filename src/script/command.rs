use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Append(String),
    Insert(usize, String),
    Delete(usize, usize),
    Split(usize),
    Rebalance,
    Print,
    Stats,
}

impl Command {
    /// Parses one script line. Blank lines and `#` comments yield `None`.
    ///
    /// Text arguments are everything after the single space that follows the
    /// preceding word, so leading and trailing spaces are kept.
    pub fn parse(line: &str) -> Result<Option<Self>, Report> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let command = match name {
            "append" => Command::Append(rest.to_string()),
            "insert" => {
                let (index, text) = rest.split_once(' ').unwrap_or((rest, ""));
                Command::Insert(parse_number(index, "index")?, text.to_string())
            }
            "delete" => {
                let mut args = rest.split_whitespace();
                let index = args.next().ok_or_else(|| eyre!("delete needs an index"))?;
                let size = args.next().ok_or_else(|| eyre!("delete needs a size"))?;
                Command::Delete(parse_number(index, "index")?, parse_number(size, "size")?)
            }
            "split" => Command::Split(parse_number(rest.trim(), "index")?),
            "rebalance" => Command::Rebalance,
            "print" => Command::Print,
            "stats" => Command::Stats,
            _ => return Err(eyre!("Unknown command: {}", name)),
        };

        Ok(Some(command))
    }
}

fn parse_number(value: &str, what: &str) -> Result<usize, Report> {
    value.parse::<usize>().wrap_err_with(|| format!("Invalid {} '{}'", what, value))
}
